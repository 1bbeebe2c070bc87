//! HTTP handlers for emergency contacts and experts

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use shared::{EmergencyDirectory, Expert};

use crate::error::AppResult;
use crate::services::DirectoryService;

/// Emergency hotline, chat support, community and experts
pub async fn get_emergency_directory() -> Json<EmergencyDirectory> {
    Json(DirectoryService::new().emergency())
}

#[derive(Debug, Deserialize)]
pub struct ExpertQuery {
    pub available: Option<bool>,
}

/// List experts
pub async fn list_experts(Query(query): Query<ExpertQuery>) -> Json<Vec<Expert>> {
    Json(DirectoryService::new().experts(query.available.unwrap_or(false)))
}

/// Get an expert by ID
pub async fn get_expert(Path(expert_id): Path<String>) -> AppResult<Json<Expert>> {
    let expert = DirectoryService::new().expert(&expert_id)?;
    Ok(Json(expert))
}
