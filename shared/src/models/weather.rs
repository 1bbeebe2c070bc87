//! Weather data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::DataSource;

/// City shown when the advisory panel is opened without a search
pub const DEFAULT_ADVISORY_LOCATION: &str = "Local Farm";

/// Current weather conditions for a city, ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    /// Rounded to the nearest whole degree
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub wind_speed_mps: Decimal,
    pub wind_speed_kmh: Decimal,
    pub precipitation_mm: Decimal,
    /// Chance of precipitation; the current-weather endpoint does not report it
    pub precipitation_chance_percent: Option<i32>,
    pub condition: String,
    pub icon_url: Option<String>,
    pub source: DataSource,
    pub fetched_at: DateTime<Utc>,
}

/// Convert wind speed from metres per second to kilometres per hour (1 dp)
pub fn mps_to_kmh(mps: Decimal) -> Decimal {
    (mps * Decimal::new(36, 1)).round_dp(1)
}

/// Round a temperature to the nearest whole degree, halves up (-3.5 becomes -3)
pub fn round_temperature(celsius: Decimal) -> Decimal {
    (celsius + Decimal::new(5, 1)).floor()
}

/// Icon URL for an OpenWeatherMap condition code such as `04d`
pub fn icon_url(code: &str) -> Option<String> {
    if code.trim().is_empty() {
        return None;
    }
    Some(format!("https://openweathermap.org/img/wn/{}@2x.png", code.trim()))
}

impl WeatherReading {
    /// Build a reading from raw API values, deriving rounded temperature and km/h wind
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        city: String,
        temperature_celsius: Decimal,
        humidity_percent: i32,
        wind_speed_mps: Decimal,
        precipitation_mm: Decimal,
        condition: String,
        icon_code: &str,
        source: DataSource,
    ) -> Self {
        Self {
            city,
            temperature_celsius: round_temperature(temperature_celsius),
            humidity_percent: humidity_percent.clamp(0, 100),
            wind_speed_mps,
            wind_speed_kmh: mps_to_kmh(wind_speed_mps),
            precipitation_mm,
            precipitation_chance_percent: None,
            condition,
            icon_url: icon_url(icon_code),
            source,
            fetched_at: Utc::now(),
        }
    }
}

/// Mock reading used when the weather API is not configured
pub fn mock_reading(city: &str) -> WeatherReading {
    let mut reading = WeatherReading::from_raw(
        city.to_string(),
        Decimal::from(25),
        65,
        // 12 km/h
        Decimal::new(333, 2),
        Decimal::ZERO,
        "Partly Cloudy".to_string(),
        "02d",
        DataSource::Mock,
    );
    reading.precipitation_chance_percent = Some(20);
    reading
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_mps_to_kmh() {
        assert_eq!(mps_to_kmh(dec("10")), dec("36.0"));
        assert_eq!(mps_to_kmh(dec("3.33")), dec("12.0"));
        assert_eq!(mps_to_kmh(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_round_temperature() {
        assert_eq!(round_temperature(dec("24.5")), dec("25"));
        assert_eq!(round_temperature(dec("24.49")), dec("24"));
        assert_eq!(round_temperature(dec("-3.5")), dec("-3"));
        assert_eq!(round_temperature(dec("-0.5")), Decimal::ZERO);
        assert_eq!(round_temperature(dec("-3.6")), dec("-4"));
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            icon_url("10d").as_deref(),
            Some("https://openweathermap.org/img/wn/10d@2x.png")
        );
        assert_eq!(icon_url(" "), None);
    }

    #[test]
    fn test_mock_reading() {
        let reading = mock_reading("Pune");
        assert_eq!(reading.city, "Pune");
        assert_eq!(reading.temperature_celsius, dec("25"));
        assert_eq!(reading.humidity_percent, 65);
        assert_eq!(reading.wind_speed_kmh, dec("12.0"));
        assert_eq!(reading.condition, "Partly Cloudy");
        assert_eq!(reading.precipitation_chance_percent, Some(20));
        assert_eq!(reading.precipitation_mm, Decimal::ZERO);
        assert_eq!(reading.source, DataSource::Mock);
    }

    #[test]
    fn test_humidity_clamped() {
        let reading = WeatherReading::from_raw(
            "X".into(),
            dec("20"),
            140,
            dec("1"),
            Decimal::ZERO,
            "clear sky".into(),
            "01d",
            DataSource::Live,
        );
        assert_eq!(reading.humidity_percent, 100);
    }
}
