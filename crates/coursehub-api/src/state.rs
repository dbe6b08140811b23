//! Application state shared by all handlers.

use coursehub_core::{Config, UploadValidator};
use coursehub_storage::{KeyGenerator, Storage};
use std::sync::Arc;

/// Upload settings derived from configuration once at startup.
#[derive(Clone)]
pub struct UploadConfig {
    /// Logical folder on the remote store
    pub folder: String,
    pub max_files_per_request: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub key_generator: Arc<KeyGenerator>,
    pub validator: UploadValidator,
    pub upload: UploadConfig,
    /// Error responses omit `details` and `error_type` when set
    pub is_production: bool,
}

impl AppState {
    /// Build state around an already-constructed storage backend.
    pub fn new(config: &Config, storage: Arc<dyn Storage>, key_generator: KeyGenerator) -> Self {
        Self {
            validator: UploadValidator::new(config.max_file_size_bytes),
            upload: UploadConfig {
                folder: config.upload_folder.clone(),
                max_files_per_request: config.max_files_per_request,
            },
            is_production: config.is_production(),
            key_generator: Arc::new(key_generator),
            storage,
        }
    }
}
