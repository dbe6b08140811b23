//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    /// Active storage backend (`cloudinary` or `local`)
    pub storage: String,
    pub upload_folder: String,
    pub max_file_size_bytes: usize,
    pub max_files_per_request: usize,
}

/// Liveness probe - process is running.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive"))
)]
pub async fn liveness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "alive" })))
}

/// Readiness probe - reports the storage backend and upload limits in effect.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses((status = 200, description = "Service is ready", body = ReadinessResponse))
)]
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ReadinessResponse {
            status: "ready".to_string(),
            storage: state.storage.backend_type().to_string(),
            upload_folder: state.upload.folder.clone(),
            max_file_size_bytes: state.validator.max_file_size(),
            max_files_per_request: state.upload.max_files_per_request,
        }),
    )
}
