//! Configuration management for the Farm Assist platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARM_ prefix
//!
//! An empty API key means the integration is not wired up and the service
//! falls back to mock data.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Plant identification API configuration
    pub plant_id: PlantIdConfig,

    /// Translation API configuration
    pub translation: TranslationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Largest accepted request body, in bytes (image uploads)
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlantIdConfig {
    /// Plant identification API endpoint
    pub api_endpoint: String,

    /// Plant identification API key
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation API endpoint
    pub api_endpoint: String,

    /// Translation API key
    pub api_key: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.max_upload_bytes", 10 * 1024 * 1024)?
            .set_default("weather.api_endpoint", DEFAULT_WEATHER_ENDPOINT)?
            .set_default("weather.api_key", "")?
            .set_default("plant_id.api_endpoint", DEFAULT_PLANT_ID_ENDPOINT)?
            .set_default("plant_id.api_key", "")?
            .set_default("plant_id.timeout_secs", 60)?
            .set_default("translation.api_endpoint", DEFAULT_TRANSLATION_ENDPOINT)?
            .set_default("translation.api_key", "")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_PLANT_ID_ENDPOINT: &str = "https://api.plant.id/v2";
pub const DEFAULT_TRANSLATION_ENDPOINT: &str =
    "https://translation.googleapis.com/language/translate/v2";

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for PlantIdConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_PLANT_ID_ENDPOINT.to_string(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_TRANSLATION_ENDPOINT.to_string(),
            api_key: String::new(),
        }
    }
}
