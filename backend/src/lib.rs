//! Farm Assist Platform - Backend Server
//!
//! Plant disease identification, weather advisories and emergency contacts
//! for farmers. Disease detection and weather data come from third-party
//! APIs, with in-memory mock data when those are not configured.

use std::{sync::Arc, time::Duration};

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use error::AppResult;
use external::{PlantIdClient, TranslationClient, WeatherClient};
use services::Translator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_client: Option<WeatherClient>,
    pub plant_id_client: Option<PlantIdClient>,
    pub translator: Translator,
}

impl AppState {
    /// Build clients for every integration that has an API key
    pub fn new(config: Config) -> AppResult<Self> {
        let weather_client = configured(&config.weather.api_key).then(|| {
            WeatherClient::with_base_url(
                config.weather.api_key.clone(),
                config.weather.api_endpoint.clone(),
            )
        });

        let plant_id_client = if configured(&config.plant_id.api_key) {
            Some(PlantIdClient::new(
                config.plant_id.api_endpoint.clone(),
                config.plant_id.api_key.clone(),
                Duration::from_secs(config.plant_id.timeout_secs),
            )?)
        } else {
            None
        };

        let translator = Translator::new(configured(&config.translation.api_key).then(|| {
            TranslationClient::new(
                config.translation.api_endpoint.clone(),
                config.translation.api_key.clone(),
            )
        }));

        for (name, live) in [
            ("weather", weather_client.is_some()),
            ("plant identification", plant_id_client.is_some()),
            ("translation", translator.is_enabled()),
        ] {
            if live {
                tracing::info!("{} API configured", name);
            } else {
                tracing::warn!("{} API key not set, using mock fallback", name);
            }
        }

        Ok(Self {
            config: Arc::new(config),
            weather_client,
            plant_id_client,
            translator,
        })
    }
}

fn configured(api_key: &str) -> bool {
    !api_key.trim().is_empty()
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Farm Assist Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
