use bytes::Bytes;
use coursehub_core::DocumentKind;
use coursehub_storage::StoredObject;
use serde::Serialize;
use utoipa::ToSchema;

/// A multipart part that passed type and size validation.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: String,
    pub content_type: String,
    pub kind: DocumentKind,
    pub data: Bytes,
}

/// Locator returned to the client for one stored file.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadedMaterial {
    /// Generated storage key (`material-<ms>-<name>.<ext>`)
    #[schema(example = "material-1700000000000-syllabus.pdf")]
    pub key: String,
    /// Store-side identifier, folder-qualified
    pub public_id: String,
    /// Public URL of the stored file
    pub url: String,
    pub original_name: String,
    pub content_type: String,
    pub kind: DocumentKind,
    /// Size in bytes
    pub size: u64,
}

impl UploadedMaterial {
    pub(super) fn from_stored(
        stored: StoredObject,
        original_name: String,
        content_type: String,
        kind: DocumentKind,
    ) -> Self {
        Self {
            key: stored.key.into_string(),
            public_id: stored.public_id,
            url: stored.url,
            original_name,
            content_type,
            kind,
            size: stored.bytes,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MaterialUploadResponse {
    pub message: String,
    pub file: UploadedMaterial,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchUploadResponse {
    pub message: String,
    pub files: Vec<UploadedMaterial>,
}
