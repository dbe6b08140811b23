//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::services::upload;
use coursehub_core::DocumentKind;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coursehub Materials API",
        version = "0.1.0",
        description = "Upload endpoint for course learning materials (PDF, Word, PowerPoint and plain text). Files are validated, given a unique storage key and stored in the `learning_materials` folder of the configured store. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::upload::upload_material,
        handlers::upload::upload_materials_batch,
        handlers::health::liveness_check,
        handlers::health::readiness_check,
    ),
    components(schemas(
        upload::UploadedMaterial,
        upload::MaterialUploadResponse,
        upload::BatchUploadResponse,
        handlers::health::ReadinessResponse,
        error::ErrorResponse,
        DocumentKind,
    )),
    tags(
        (name = "materials", description = "Learning material uploads"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_upload_routes() {
        let spec = get_openapi_spec();
        assert!(spec.paths.paths.contains_key("/api/v0/materials"));
        assert!(spec.paths.paths.contains_key("/api/v0/materials/batch"));
    }
}
