//! In-memory `Storage` double that records every call.

use async_trait::async_trait;
use coursehub_storage::{
    Storage, StorageBackend, StorageError, StorageResult, StoredObject, UploadObject,
};
use std::sync::Mutex;

/// Records uploads and deletes; optionally fails the n-th upload (0-based)
/// with a transport error.
#[derive(Default)]
pub struct RecordingStorage {
    fail_on_upload: Option<usize>,
    attempts: Mutex<usize>,
    uploads: Mutex<Vec<UploadObject>>,
    deletes: Mutex<Vec<String>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every upload fails.
    pub fn failing() -> Self {
        Self::failing_on(0)
    }

    pub fn failing_on(index: usize) -> Self {
        Self {
            fail_on_upload: Some(index),
            ..Self::default()
        }
    }

    pub fn upload_attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn uploads(&self) -> Vec<UploadObject> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn deleted_public_ids(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn upload(&self, object: UploadObject) -> StorageResult<StoredObject> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts - 1
        };

        if self.fail_on_upload.is_some_and(|n| attempt >= n) {
            return Err(StorageError::Transport(
                "connection reset by peer (api_key=123456)".to_string(),
            ));
        }

        let public_id = format!("{}/{}", object.folder, object.key);
        let stored = StoredObject {
            key: object.key.clone(),
            url: format!("https://res.cloudinary.test/demo/raw/upload/{}", public_id),
            public_id,
            resource_type: "raw".to_string(),
            format: object.key.extension().map(String::from),
            bytes: object.data.len() as u64,
        };
        self.uploads.lock().unwrap().push(object);
        Ok(stored)
    }

    async fn delete(&self, object: &StoredObject) -> StorageResult<()> {
        self.deletes.lock().unwrap().push(object.public_id.clone());
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
