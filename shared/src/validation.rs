//! Validation utilities for Farm Assist inputs

use thiserror::Error;

/// Longest city name accepted for a weather search
pub const MAX_CITY_LENGTH: usize = 100;

/// Input validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("City name is required")]
    EmptyCity,

    #[error("City name must be at most {MAX_CITY_LENGTH} characters")]
    CityTooLong,

    #[error("Probability must be between 0 and 1")]
    ProbabilityOutOfRange,
}

/// Validate a city search term, returning it trimmed
pub fn validate_city(city: &str) -> Result<&str, ValidationError> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCity);
    }
    if trimmed.chars().count() > MAX_CITY_LENGTH {
        return Err(ValidationError::CityTooLong);
    }
    Ok(trimmed)
}

/// Whether an uploaded file's MIME type is an image
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}

/// Validate a probability reported by a detection service
pub fn validate_probability(probability: f64) -> Result<(), ValidationError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(ValidationError::ProbabilityOutOfRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_city_valid() {
        assert_eq!(validate_city("  Nagpur "), Ok("Nagpur"));
        assert_eq!(validate_city("São Paulo"), Ok("São Paulo"));
    }

    #[test]
    fn test_validate_city_invalid() {
        assert_eq!(validate_city(""), Err(ValidationError::EmptyCity));
        assert_eq!(validate_city("   "), Err(ValidationError::EmptyCity));
        let long = "a".repeat(MAX_CITY_LENGTH + 1);
        assert_eq!(validate_city(&long), Err(ValidationError::CityTooLong));
    }

    #[test]
    fn test_is_image_content_type() {
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("IMAGE/PNG"));
        assert!(!is_image_content_type("application/pdf"));
        assert!(!is_image_content_type(""));
    }

    #[test]
    fn test_validate_probability() {
        assert!(validate_probability(0.0).is_ok());
        assert!(validate_probability(1.0).is_ok());
        assert!(validate_probability(1.01).is_err());
        assert!(validate_probability(f64::NAN).is_err());
    }
}
