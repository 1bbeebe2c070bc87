//! Error handling for the Farm Assist platform
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Upload too large")]
    PayloadTooLarge,

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("City not found")]
    CityNotFound,

    #[error("Weather service unavailable")]
    WeatherServiceUnavailable,

    #[error("Plant identification error: {0}")]
    PlantIdError(String),

    #[error("Translation error: {0}")]
    TranslationError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// HTTP status and bilingual body for this error
    pub fn detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation {
                field,
                message,
                message_hi,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("अमान्य डेटा: {}", msg),
                    field: None,
                },
            ),
            AppError::InvalidUpload(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_UPLOAD".to_string(),
                    message_en: format!("Invalid upload: {}", msg),
                    message_hi: format!("अपलोड अमान्य है: {}", msg),
                    field: None,
                },
            ),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorDetail {
                    code: "PAYLOAD_TOO_LARGE".to_string(),
                    message_en: "Uploaded files are too large".to_string(),
                    message_hi: "अपलोड की गई फ़ाइलें बहुत बड़ी हैं".to_string(),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_hi: format!("{} नहीं मिला", resource),
                    field: None,
                },
            ),
            AppError::CityNotFound => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "CITY_NOT_FOUND".to_string(),
                    message_en: "City not found. Please check the spelling and try again."
                        .to_string(),
                    message_hi: "शहर नहीं मिला। कृपया वर्तनी जाँचें और पुनः प्रयास करें।"
                        .to_string(),
                    field: Some("city".to_string()),
                },
            ),
            AppError::WeatherServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message_en: "Failed to fetch weather data. Please try again later."
                        .to_string(),
                    message_hi: "मौसम डेटा प्राप्त करने में विफल। कृपया बाद में पुनः प्रयास करें।"
                        .to_string(),
                    field: None,
                },
            ),
            AppError::PlantIdError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "PLANT_ID_ERROR".to_string(),
                    message_en: format!("Plant identification error: {}", msg),
                    message_hi: format!(
                        "छवि विश्लेषण में त्रुटि। सुनिश्चित करें कि छवि स्पष्ट है और पुनः प्रयास करें ({})",
                        msg
                    ),
                    field: None,
                },
            ),
            AppError::TranslationError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "TRANSLATION_ERROR".to_string(),
                    message_en: format!("Translation service error: {}", msg),
                    message_hi: format!("अनुवाद सेवा में त्रुटि: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_hi: format!("कॉन्फ़िगरेशन त्रुटि: {}", msg),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_hi: "आंतरिक सर्वर त्रुटि".to_string(),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

impl From<shared::ValidationError> for AppError {
    fn from(err: shared::ValidationError) -> Self {
        let (field, message_hi) = match err {
            shared::ValidationError::EmptyCity => ("city", "शहर का नाम आवश्यक है"),
            shared::ValidationError::CityTooLong => ("city", "शहर का नाम बहुत लंबा है"),
            shared::ValidationError::ProbabilityOutOfRange => {
                ("probability", "संभावना 0 और 1 के बीच होनी चाहिए")
            }
        };
        AppError::Validation {
            field: field.to_string(),
            message: err.to_string(),
            message_hi: message_hi.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.keys().copied().collect();
        fields.sort_unstable();
        match fields.first() {
            Some(field) => AppError::Validation {
                field: field.to_string(),
                message: format!("Invalid value for {}", field),
                message_hi: format!("{} के लिए अमान्य मान", field),
            },
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
