//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::WeatherReading;
use validator::Validate;

use crate::error::AppResult;
use crate::services::weather::{WeatherAdvisoryView, WeatherService};
use crate::AppState;

/// Query parameters for a city weather search
#[derive(Debug, Deserialize, Validate)]
pub struct CityQuery {
    #[validate(length(min = 1, max = 100))]
    pub city: String,
}

/// Query parameters for the advisory panel
#[derive(Debug, Deserialize, Validate)]
pub struct AdvisoryQuery {
    #[validate(length(max = 100))]
    pub city: Option<String>,
}

/// Current weather for a city
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<WeatherReading>> {
    query.validate()?;

    let service = WeatherService::new(state.weather_client);
    let reading = service.get_weather(&query.city).await?;
    Ok(Json(reading))
}

/// Weather reading with the farming advisory derived from it
pub async fn get_weather_advisory(
    State(state): State<AppState>,
    Query(query): Query<AdvisoryQuery>,
) -> AppResult<Json<WeatherAdvisoryView>> {
    query.validate()?;

    let service = WeatherService::new(state.weather_client);
    let view = service.get_advisory(query.city.as_deref()).await?;
    Ok(Json(view))
}
