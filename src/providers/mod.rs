pub mod advisory;
pub mod location;

pub use advisory::{AdvisoryEvent, AdvisoryService};
pub use location::{DeviceFixClient, LocationService};
