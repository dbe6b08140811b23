//! Health and documentation endpoint tests.

mod helpers;

use helpers::setup_test_app;
use helpers::storage::RecordingStorage;
use std::sync::Arc;

#[tokio::test]
async fn test_liveness() {
    let client = setup_test_app(Arc::new(RecordingStorage::new()), &[]);

    let response = client.get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_upload_settings() {
    let client = setup_test_app(
        Arc::new(RecordingStorage::new()),
        &[("MAX_UPLOAD_SIZE_MB", "20"), ("UPLOAD_FOLDER", "course_docs")],
    );

    let response = client.get("/health/ready").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["storage"], "local");
    assert_eq!(body["upload_folder"], "course_docs");
    assert_eq!(body["max_file_size_bytes"], 20 * 1024 * 1024);
    assert_eq!(body["max_files_per_request"], 10);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let client = setup_test_app(Arc::new(RecordingStorage::new()), &[]);

    let response = client.get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/api/v0/materials"].is_object());
    assert!(body["paths"]["/api/v0/materials/batch"].is_object());
}
