//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;
use shared::DataSource;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub integrations: IntegrationStatus,
}

/// Whether each third-party API is live or mocked
#[derive(Serialize)]
pub struct IntegrationStatus {
    pub weather: DataSource,
    pub plant_id: DataSource,
    pub translation: DataSource,
}

fn mode(configured: bool) -> DataSource {
    if configured {
        DataSource::Live
    } else {
        DataSource::Mock
    }
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        integrations: IntegrationStatus {
            weather: mode(state.weather_client.is_some()),
            plant_id: mode(state.plant_id_client.is_some()),
            translation: mode(state.translator.is_enabled()),
        },
    })
}
