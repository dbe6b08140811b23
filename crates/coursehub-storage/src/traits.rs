//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::keys::StorageKey;
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// The store could not be reached (DNS, connect, timeout, reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The store answered with an error (auth, quota, rejected format, ...).
    #[error("Remote store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A validated file ready to be written to the store.
#[derive(Debug, Clone)]
pub struct UploadObject {
    pub key: StorageKey,
    /// Logical folder on the remote store (e.g. `learning_materials`)
    pub folder: String,
    pub original_name: String,
    pub content_type: String,
    pub data: Bytes,
    /// Extensions the store should accept for this object
    pub allowed_formats: Vec<String>,
}

/// Remote record created by a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct StoredObject {
    pub key: StorageKey,
    /// Store-side identifier (folder-qualified)
    pub public_id: String,
    /// Public locator
    pub url: String,
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub bytes: u64,
}

/// Storage abstraction trait
///
/// Backends receive only validated files. Errors are returned as-is; callers
/// decide how much of them to expose. No backend retries on its own.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write the object under `folder/key` and return the store's record of it.
    async fn upload(&self, object: UploadObject) -> StorageResult<StoredObject>;

    /// Remove a previously stored object.
    async fn delete(&self, object: &StoredObject) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
