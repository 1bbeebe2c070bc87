//! HTTP handlers for plant disease detection

use axum::{
    extract::{multipart::MultipartError, Multipart, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{recommendations_for, AnalysisBatch, Recommendations};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::disease::{DiseaseService, UploadedImage};
use crate::AppState;

fn upload_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::InvalidUpload(e.body_text())
    }
}

/// Analyse uploaded plant images (multipart, one part per file)
pub async fn analyze_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<AnalysisBatch>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        // Plain form fields carry no file name
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(upload_error)?;

        files.push(UploadedImage {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    tracing::info!("Received {} uploaded file(s) for analysis", files.len());

    let service = DiseaseService::new(state.plant_id_client, state.translator);
    let batch = service.analyze_batch(files).await?;
    Ok(Json(batch))
}

/// Query parameters for a recommendation lookup
#[derive(Debug, Deserialize, Validate)]
pub struct RecommendationQuery {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub disease_name: String,
    pub recommendations: Recommendations,
}

/// Immediate actions for a named disease
pub async fn get_recommendations(
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    query.validate()?;

    Ok(Json(RecommendationResponse {
        recommendations: recommendations_for(&query.name),
        disease_name: query.name,
    }))
}
