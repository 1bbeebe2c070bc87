//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap API for current conditions by city name

use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{DataSource, WeatherReading};

use crate::config::DEFAULT_WEATHER_ENDPOINT;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    name: String,
    #[serde(default)]
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

fn to_decimal(value: f64, dp: u32) -> Decimal {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(dp))
        .unwrap_or_default()
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_WEATHER_ENDPOINT.to_string())
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current weather conditions for a city
    pub async fn get_current_by_city(&self, city: &str) -> AppResult<WeatherReading> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::CityNotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OWMCurrentResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse weather response: {}", e);
            AppError::WeatherServiceUnavailable
        })?;

        Ok(Self::convert_current_response(data))
    }

    /// Convert OpenWeatherMap current response to our format
    fn convert_current_response(data: OWMCurrentResponse) -> WeatherReading {
        let weather = data.weather.first();

        WeatherReading::from_raw(
            data.name,
            to_decimal(data.main.temp, 2),
            data.main.humidity,
            to_decimal(data.wind.speed, 2),
            data.rain
                .and_then(|r| r.one_hour)
                .map(|v| to_decimal(v, 2))
                .unwrap_or_default(),
            weather.map(|w| w.description.clone()).unwrap_or_default(),
            weather.map(|w| w.icon.as_str()).unwrap_or_default(),
            DataSource::Live,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_convert_current_response() {
        let data: OWMCurrentResponse = serde_json::from_str(
            r#"{
                "name": "Nashik",
                "weather": [{"main": "Rain", "description": "light rain", "icon": "10d"}],
                "main": {"temp": 27.6, "humidity": 84, "pressure": 1008},
                "wind": {"speed": 5.0, "deg": 240},
                "rain": {"1h": 0.42}
            }"#,
        )
        .unwrap();

        let reading = WeatherClient::convert_current_response(data);
        assert_eq!(reading.city, "Nashik");
        assert_eq!(reading.temperature_celsius, Decimal::from(28));
        assert_eq!(reading.humidity_percent, 84);
        assert_eq!(reading.wind_speed_kmh, Decimal::from(18));
        assert_eq!(reading.precipitation_mm, Decimal::from_str("0.42").unwrap());
        assert_eq!(reading.condition, "light rain");
        assert_eq!(
            reading.icon_url.as_deref(),
            Some("https://openweathermap.org/img/wn/10d@2x.png")
        );
        assert_eq!(reading.source, DataSource::Live);
    }

    #[test]
    fn test_convert_without_rain_or_weather() {
        let data: OWMCurrentResponse = serde_json::from_str(
            r#"{
                "name": "Jaipur",
                "weather": [],
                "main": {"temp": 31.2, "humidity": 20},
                "wind": {"speed": 2.5}
            }"#,
        )
        .unwrap();

        let reading = WeatherClient::convert_current_response(data);
        assert_eq!(reading.precipitation_mm, Decimal::ZERO);
        assert_eq!(reading.condition, "");
        assert_eq!(reading.icon_url, None);
    }
}
