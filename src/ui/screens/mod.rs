pub mod crops;
pub mod dashboard;
pub mod language;
pub mod location;
pub mod soil;
pub mod weather;

pub use crops::CropsScreen;
pub use dashboard::DashboardScreen;
pub use language::LanguageScreen;
pub use location::LocationScreen;
pub use soil::SoilScreen;
pub use weather::WeatherScreen;
