//! Plant disease analysis service
//!
//! Sends each uploaded image to the plant identification API (or picks a mock
//! detection when the API is not configured) and maps the result into a
//! display record with severity and recommendations.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use sha2::{Digest, Sha256};
use shared::{
    classify_severity, is_image_content_type, mock_detection, recommendations_for,
    AnalysisBatch, AnalysisEntry, DataSource, DiseaseAnalysis,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::plant_id::{self, Identification, PlantIdClient};
use crate::services::Translator;

/// An uploaded file
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Disease analysis service
#[derive(Clone)]
pub struct DiseaseService {
    plant_id_client: Option<PlantIdClient>,
    translator: Translator,
}

impl DiseaseService {
    pub fn new(plant_id_client: Option<PlantIdClient>, translator: Translator) -> Self {
        Self {
            plant_id_client,
            translator,
        }
    }

    /// Analyse every image in an upload, in order.
    ///
    /// Non-image files are skipped. A failure on one image is reported in its
    /// entry and does not stop the rest of the batch.
    pub async fn analyze_batch(&self, files: Vec<UploadedImage>) -> AppResult<AnalysisBatch> {
        let (images, skipped): (Vec<_>, Vec<_>) = files
            .into_iter()
            .partition(|f| is_image_content_type(&f.content_type));

        let skipped_files: Vec<String> = skipped.into_iter().map(|f| f.file_name).collect();
        if !skipped_files.is_empty() {
            tracing::info!("Skipping non-image uploads: {:?}", skipped_files);
        }

        if images.is_empty() {
            return Err(AppError::Validation {
                field: "images".to_string(),
                message: "Upload at least one image file".to_string(),
                message_hi: "कम से कम एक छवि फ़ाइल अपलोड करें".to_string(),
            });
        }

        let mut results = Vec::with_capacity(images.len());
        for image in &images {
            let entry = match self.analyze_image(image).await {
                Ok(analysis) => AnalysisEntry::Analyzed(analysis),
                Err(e) => {
                    tracing::error!("Error analyzing {}: {}", image.file_name, e);
                    let (_, detail) = e.detail();
                    AnalysisEntry::Failed {
                        file_name: image.file_name.clone(),
                        message: detail.message_en,
                        message_hi: detail.message_hi,
                    }
                }
            };
            results.push(entry);
        }

        Ok(AnalysisBatch {
            results,
            skipped_files,
        })
    }

    /// Analyse a single image
    pub async fn analyze_image(&self, image: &UploadedImage) -> AppResult<DiseaseAnalysis> {
        if image.bytes.is_empty() {
            return Err(AppError::InvalidUpload(format!("{} is empty", image.file_name)));
        }

        let (identification, source) = match &self.plant_id_client {
            Some(client) => {
                let response = client.identify(STANDARD.encode(&image.bytes)).await?;
                (plant_id::interpret(response)?, DataSource::Live)
            }
            None => (Self::mock_identification(&image.bytes), DataSource::Mock),
        };

        Ok(self
            .build_analysis(&image.file_name, identification, source)
            .await)
    }

    /// Deterministic stand-in for the identification API
    fn mock_identification(bytes: &[u8]) -> Identification {
        let digest = Sha256::digest(bytes);
        let (disease, confidence) = mock_detection(&digest);
        Identification {
            plant_name: disease.plant_name.to_string(),
            disease_name: disease.disease_name.to_string(),
            confidence,
            disease_probability: confidence,
            treatment: disease.treatment.to_string(),
        }
    }

    async fn build_analysis(
        &self,
        file_name: &str,
        identification: Identification,
        source: DataSource,
    ) -> DiseaseAnalysis {
        let severity = classify_severity(identification.disease_probability);
        let recommendations = recommendations_for(&identification.disease_name);

        let plant_name_hi = self.translator.to_hindi(&identification.plant_name).await;
        let disease_name_hi = self.translator.to_hindi(&identification.disease_name).await;
        let treatment_hi = self.translator.to_hindi(&identification.treatment).await;

        DiseaseAnalysis {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            plant_name: identification.plant_name,
            plant_name_hi,
            disease_name: identification.disease_name,
            disease_name_hi,
            confidence: identification.confidence,
            severity,
            treatment: identification.treatment,
            treatment_hi,
            source,
            recommendations,
            analyzed_at: Utc::now(),
        }
    }
}
