//! Translation API client
//!
//! Google Translate v2 client used to render analysis results in Hindi.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::Language;

use crate::error::{AppError, AppResult};

/// Translation API client
#[derive(Clone)]
pub struct TranslationClient {
    client: Client,
    api_endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'static str,
    target: &'static str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

impl TranslationClient {
    pub fn new(api_endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_endpoint,
            api_key,
        }
    }

    /// Translate English text into the target language
    pub async fn translate(&self, text: &str, target: Language) -> AppResult<String> {
        let response = self
            .client
            .post(&self.api_endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&TranslateRequest {
                q: text,
                source: Language::English.code(),
                target: target.code(),
                format: "text",
            })
            .send()
            .await
            .map_err(|e| AppError::TranslationError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::TranslationError(format!(
                "Translation failed with status {}",
                response.status()
            )));
        }

        let result: TranslateResponse = response
            .json()
            .await
            .map_err(|e| AppError::TranslationError(format!("Failed to parse response: {}", e)))?;

        result
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| AppError::TranslationError("Empty translation".to_string()))
    }
}
