//! External API integrations

pub mod plant_id;
pub mod translate;
pub mod weather;

pub use plant_id::PlantIdClient;
pub use translate::TranslationClient;
pub use weather::WeatherClient;
