//! Plant identification client
//!
//! Client for the Plant.id v2 identification and health assessment API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{clamp_confidence, validate_probability, NO_DISEASE_DETECTED};

use crate::error::{AppError, AppResult};

/// Treatment text when the API returns no treatment details
pub const NO_SPECIFIC_TREATMENT: &str = "No specific treatment recommended";
/// Treatment text when no disease was found
pub const NO_TREATMENT_NEEDED: &str = "No treatment needed";

/// Client for the plant identification API
#[derive(Clone)]
pub struct PlantIdClient {
    api_endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Request to identify a plant and assess its health
#[derive(Debug, Serialize)]
pub struct IdentifyRequest {
    pub images: Vec<String>,
    pub modifiers: Vec<&'static str>,
    pub plant_details: Vec<&'static str>,
    pub disease_details: Vec<&'static str>,
}

impl IdentifyRequest {
    /// Request for a single base64-encoded image
    pub fn for_image(image_base64: String) -> Self {
        Self {
            images: vec![image_base64],
            modifiers: vec!["health_all", "disease_similar_images"],
            plant_details: vec!["common_names", "url", "wiki_description", "taxonomy"],
            disease_details: vec!["description", "treatment", "classification"],
        }
    }
}

/// Response from the identify endpoint
#[derive(Debug, Deserialize)]
pub struct IdentifyResponse {
    #[serde(default)]
    pub suggestions: Vec<PlantSuggestion>,
    pub health_assessment: Option<HealthAssessment>,
}

#[derive(Debug, Deserialize)]
pub struct PlantSuggestion {
    pub plant_name: String,
    #[serde(default)]
    pub probability: f64,
}

#[derive(Debug, Deserialize)]
pub struct HealthAssessment {
    pub is_healthy_probability: Option<f64>,
    pub diseases: Option<Vec<DiseaseSuggestion>>,
}

#[derive(Debug, Deserialize)]
pub struct DiseaseSuggestion {
    pub name: String,
    pub probability: Option<f64>,
    pub disease_details: Option<DiseaseDetails>,
}

#[derive(Debug, Deserialize)]
pub struct DiseaseDetails {
    pub description: Option<String>,
    pub treatment: Option<TreatmentDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TreatmentDetails {
    #[serde(default)]
    pub biological: Vec<String>,
    #[serde(default)]
    pub chemical: Vec<String>,
    #[serde(default)]
    pub prevention: Vec<String>,
}

impl TreatmentDetails {
    /// Flatten treatment lists into one display paragraph
    pub fn summary(&self) -> Option<String> {
        let sections: Vec<String> = [
            ("Biological", &self.biological),
            ("Chemical", &self.chemical),
            ("Prevention", &self.prevention),
        ]
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(label, items)| format!("{}: {}", label, items.join("; ")))
        .collect();

        if sections.is_empty() {
            None
        } else {
            Some(sections.join(". "))
        }
    }
}

/// The fields of an identification we display
#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    pub plant_name: String,
    pub disease_name: String,
    /// Disease probability, or the plant match probability when the
    /// disease carries none
    pub confidence: f64,
    /// Disease probability alone; 0 when none was reported
    pub disease_probability: f64,
    pub treatment: String,
}

/// Map an identify response to display fields
pub fn interpret(response: IdentifyResponse) -> AppResult<Identification> {
    let plant = response
        .suggestions
        .into_iter()
        .next()
        .ok_or_else(|| AppError::PlantIdError("No plant matches found".to_string()))?;

    let diseases = response
        .health_assessment
        .and_then(|h| h.diseases)
        .ok_or_else(|| AppError::PlantIdError("No health assessment available".to_string()))?;

    let Some(disease) = diseases.into_iter().next() else {
        return Ok(Identification {
            plant_name: plant.plant_name,
            disease_name: NO_DISEASE_DETECTED.to_string(),
            confidence: clamp_confidence(plant.probability),
            disease_probability: 0.0,
            treatment: NO_TREATMENT_NEEDED.to_string(),
        });
    };

    let probability = disease.probability.unwrap_or(0.0);
    if let Err(e) = validate_probability(probability) {
        tracing::warn!("Disease probability {} for {}: {}", probability, disease.name, e);
    }
    let confidence = if probability > 0.0 {
        probability
    } else {
        plant.probability
    };

    let treatment = disease
        .disease_details
        .and_then(|d| d.treatment)
        .and_then(|t| t.summary())
        .unwrap_or_else(|| NO_SPECIFIC_TREATMENT.to_string());

    Ok(Identification {
        plant_name: plant.plant_name,
        disease_name: disease.name,
        confidence: clamp_confidence(confidence),
        disease_probability: clamp_confidence(probability),
        treatment,
    })
}

impl PlantIdClient {
    /// Create a new plant identification client
    pub fn new(api_endpoint: String, api_key: String, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint: api_endpoint.trim_end_matches('/').to_string(),
            api_key,
            http_client,
        })
    }

    /// Send an image for identification and health assessment
    pub async fn identify(&self, image_base64: String) -> AppResult<IdentifyResponse> {
        let url = format!("{}/identify", self.api_endpoint);

        let response = self
            .http_client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&IdentifyRequest::for_image(image_base64))
            .send()
            .await
            .map_err(|e| AppError::PlantIdError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Plant identification API returned {}: {}", status, body);
            return Err(AppError::PlantIdError(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let result: IdentifyResponse = response
            .json()
            .await
            .map_err(|e| AppError::PlantIdError(format!("Failed to parse response: {}", e)))?;

        Ok(result)
    }
}
