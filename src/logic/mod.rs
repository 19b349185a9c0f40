pub mod bands;
pub mod narration;
pub mod suitability;

pub use bands::classify;
pub use suitability::bucket;
