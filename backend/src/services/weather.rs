//! Weather service for current conditions and farming advisories

use serde::Serialize;
use shared::{
    advisory_for, classify_advisory, mock_reading, validate_city, AdvisoryBundle, WeatherReading,
    DEFAULT_ADVISORY_LOCATION,
};

use crate::error::AppResult;
use crate::external::weather::WeatherClient;

/// Weather service; uses mock readings when no client is configured
#[derive(Clone)]
pub struct WeatherService {
    weather_client: Option<WeatherClient>,
}

/// Reading plus the advisory derived from it
#[derive(Debug, Clone, Serialize)]
pub struct WeatherAdvisoryView {
    pub reading: WeatherReading,
    pub advisory: AdvisoryBundle,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(weather_client: Option<WeatherClient>) -> Self {
        Self { weather_client }
    }

    /// Current conditions for a city
    pub async fn get_weather(&self, city: &str) -> AppResult<WeatherReading> {
        let city = validate_city(city)?;

        match &self.weather_client {
            Some(client) => {
                tracing::debug!("Fetching live weather for {}", city);
                client.get_current_by_city(city).await
            }
            None => {
                tracing::info!("Weather API not configured, using mock data for {}", city);
                Ok(mock_reading(city))
            }
        }
    }

    /// Advisory for a city, or for the default location when none is given
    pub async fn get_advisory(&self, city: Option<&str>) -> AppResult<WeatherAdvisoryView> {
        let reading = match city.map(str::trim).filter(|c| !c.is_empty()) {
            Some(city) => self.get_weather(city).await?,
            None => mock_reading(DEFAULT_ADVISORY_LOCATION),
        };

        let kind = classify_advisory(reading.temperature_celsius, reading.humidity_percent);
        tracing::debug!("Advisory for {}: {}", reading.city, kind);

        Ok(WeatherAdvisoryView {
            reading,
            advisory: advisory_for(kind),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use shared::{AdvisoryKind, DataSource};

    #[tokio::test]
    async fn test_mock_weather() {
        let service = WeatherService::new(None);
        let reading = service.get_weather("  Indore ").await.unwrap();
        assert_eq!(reading.city, "Indore");
        assert_eq!(reading.source, DataSource::Mock);
    }

    #[tokio::test]
    async fn test_blank_city_rejected() {
        let service = WeatherService::new(None);
        let err = service.get_weather("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_default_advisory() {
        let service = WeatherService::new(None);
        let view = service.get_advisory(None).await.unwrap();
        assert_eq!(view.reading.city, DEFAULT_ADVISORY_LOCATION);
        assert_eq!(view.advisory.kind, AdvisoryKind::Optimal);
    }
}
