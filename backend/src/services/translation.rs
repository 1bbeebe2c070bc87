//! Hindi rendering of analysis text

use shared::Language;

use crate::external::TranslationClient;

/// Translates display text, passing it through unchanged when no
/// translation API is configured or the call fails
#[derive(Clone, Default)]
pub struct Translator {
    client: Option<TranslationClient>,
}

impl Translator {
    pub fn new(client: Option<TranslationClient>) -> Self {
        Self { client }
    }

    /// Passthrough translator
    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Translate to Hindi; never fails
    pub async fn to_hindi(&self, text: &str) -> String {
        let Some(client) = &self.client else {
            return text.to_string();
        };
        if text.trim().is_empty() {
            return text.to_string();
        }

        match client.translate(text, Language::Hindi).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!("Translation error, using original text: {}", e);
                text.to_string()
            }
        }
    }
}
