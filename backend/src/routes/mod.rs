//! Route definitions for the Farm Assist platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/weather", weather_routes())
        .nest("/disease", disease_routes())
        .route("/emergency", get(handlers::get_emergency_directory))
        .nest("/experts", expert_routes())
}

/// Weather and advisory routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_current_weather))
        .route("/advisory", get(handlers::get_weather_advisory))
}

/// Disease detection routes
fn disease_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(handlers::analyze_images))
        .route("/recommendations", get(handlers::get_recommendations))
}

/// Expert directory routes
fn expert_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_experts))
        .route("/:expert_id", get(handlers::get_expert))
}
