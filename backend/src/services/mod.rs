//! Business logic services for the Farm Assist platform

pub mod directory;
pub mod disease;
pub mod translation;
pub mod weather;

pub use directory::DirectoryService;
pub use disease::DiseaseService;
pub use translation::Translator;
pub use weather::WeatherService;
