use crate::constants::{BATCH_FILES_FIELD, SINGLE_FILE_FIELD};
use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::{BatchUploadResponse, MaterialUploadResponse, MaterialUploadService};
use crate::state::AppState;
use crate::utils::multipart::MaterialParts;
use axum::{
    extract::{Multipart, State},
    Json,
};
use coursehub_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/v0/materials",
    tag = "materials",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "One file in the `file` field"),
    responses(
        (status = 200, description = "Material uploaded successfully", body = MaterialUploadResponse),
        (status = 400, description = "Unsupported file type or malformed request", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Remote store failed", body = ErrorResponse)
    )
)]
pub async fn upload_material(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<MaterialUploadResponse>, HttpAppError> {
    let mut parts = MaterialParts::new(multipart, SINGLE_FILE_FIELD, 1, state.validator);
    let file = parts
        .next_file()
        .await?
        .ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;
    parts.finish().await?;

    let uploaded = MaterialUploadService::new(&state).upload(file).await?;

    Ok(Json(MaterialUploadResponse {
        message: "File uploaded successfully".to_string(),
        file: uploaded,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v0/materials/batch",
    tag = "materials",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "One or more files in repeated `files` fields"),
    responses(
        (status = 200, description = "All materials uploaded successfully", body = BatchUploadResponse),
        (status = 400, description = "Unsupported file type, too many files or malformed request", body = ErrorResponse),
        (status = 413, description = "A file is too large", body = ErrorResponse),
        (status = 502, description = "Remote store failed; nothing from this request is kept", body = ErrorResponse)
    )
)]
pub async fn upload_materials_batch(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<BatchUploadResponse>, HttpAppError> {
    let mut parts = MaterialParts::new(
        multipart,
        BATCH_FILES_FIELD,
        state.upload.max_files_per_request,
        state.validator,
    );

    let uploaded = MaterialUploadService::new(&state)
        .upload_parts(&mut parts)
        .await?;

    Ok(Json(BatchUploadResponse {
        message: format!("{} files uploaded successfully", uploaded.len()),
        files: uploaded,
    }))
}
