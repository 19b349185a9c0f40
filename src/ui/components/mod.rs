pub mod input;
pub mod meter;

pub use input::InputWidget;
pub use meter::MeterWidget;
