//! WebAssembly module for the Farm Assist platform
//!
//! Provides client-side computation for:
//! - Disease severity classification
//! - Weather advisory selection
//! - Wind speed unit conversion
//! - Upload filtering and input validation

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("farm-assist wasm initialised"));
}

/// Classify a detection probability as "Low", "Medium" or "High"
#[wasm_bindgen]
pub fn classify_disease_severity(probability: f64) -> String {
    classify_severity(probability).to_string()
}

/// Hindi label for a detection probability's severity
#[wasm_bindgen]
pub fn classify_disease_severity_hi(probability: f64) -> String {
    classify_severity(probability)
        .label(Language::Hindi)
        .to_string()
}

/// Advisory bundle JSON for a temperature/humidity pair
#[wasm_bindgen]
pub fn weather_advisory(temperature_celsius: f64, humidity_percent: i32) -> Result<String, JsValue> {
    let temperature = Decimal::try_from(temperature_celsius)
        .map_err(|e| JsValue::from_str(&format!("Invalid temperature: {}", e)))?;

    let bundle = advisory_for(classify_advisory(temperature, humidity_percent));
    serde_json::to_string(&bundle)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize advisory: {}", e)))
}

/// Advisory kind only, e.g. "heat_stress"
#[wasm_bindgen]
pub fn weather_advisory_kind(temperature_celsius: f64, humidity_percent: i32) -> String {
    let temperature = Decimal::try_from(temperature_celsius).unwrap_or(Decimal::ZERO);
    let kind = classify_advisory(temperature, humidity_percent);
    serde_json::to_value(kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Convert wind speed from m/s to km/h (1 dp)
#[wasm_bindgen]
pub fn wind_speed_kmh(mps: f64) -> f64 {
    let mps = Decimal::try_from(mps).unwrap_or(Decimal::ZERO);
    mps_to_kmh(mps).to_string().parse().unwrap_or(0.0)
}

/// Recommendations for a disease as JSON
#[wasm_bindgen]
pub fn disease_recommendations(disease_name: &str) -> Result<String, JsValue> {
    serde_json::to_string(&recommendations_for(disease_name))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize recommendations: {}", e)))
}

/// Keep only the MIME types that should be uploaded for analysis
#[wasm_bindgen]
pub fn filter_image_types(content_types: js_sys::Array) -> js_sys::Array {
    content_types
        .iter()
        .filter(|v| v.as_string().map(|t| is_image_content_type(&t)).unwrap_or(false))
        .collect()
}

/// Whether a city search term should be submitted
#[wasm_bindgen]
pub fn is_valid_city(city: &str) -> bool {
    validate_city(city).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_disease_severity() {
        assert_eq!(classify_disease_severity(0.1), "Low");
        assert_eq!(classify_disease_severity(0.5), "Medium");
        assert_eq!(classify_disease_severity(0.9), "High");
        assert_eq!(classify_disease_severity_hi(0.9), "उच्च");
    }

    #[test]
    fn test_weather_advisory_kind() {
        assert_eq!(weather_advisory_kind(38.0, 30), "heat_stress");
        assert_eq!(weather_advisory_kind(5.0, 30), "cold_stress");
        assert_eq!(weather_advisory_kind(25.0, 90), "heavy_rain");
        assert_eq!(weather_advisory_kind(25.0, 65), "optimal");
    }

    #[test]
    fn test_wind_speed_kmh() {
        assert!((wind_speed_kmh(10.0) - 36.0).abs() < 0.001);
        assert!((wind_speed_kmh(4.5) - 16.2).abs() < 0.001);
    }

    #[test]
    fn test_is_valid_city() {
        assert!(is_valid_city("Bhopal"));
        assert!(!is_valid_city("  "));
    }

    #[test]
    fn test_disease_recommendations_json() {
        let json = disease_recommendations("Apple Scab").unwrap();
        assert!(json.contains("Plant resistant varieties"));
    }
}
