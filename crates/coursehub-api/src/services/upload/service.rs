use super::types::{IncomingFile, UploadedMaterial};
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::multipart::MaterialParts;
use coursehub_core::DocumentKind;
use coursehub_storage::{StoredObject, UploadObject};

/// Sends validated files to the configured store.
///
/// Files reaching this service have already been accepted by the validator;
/// store failures are returned as-is and never retried.
pub struct MaterialUploadService<'a> {
    state: &'a AppState,
}

impl<'a> MaterialUploadService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn upload(&self, file: IncomingFile) -> Result<UploadedMaterial, HttpAppError> {
        let (original_name, content_type, kind) =
            (file.original_name.clone(), file.content_type.clone(), file.kind);
        let stored = self.store(file).await?;
        Ok(UploadedMaterial::from_stored(stored, original_name, content_type, kind))
    }

    /// Store each part as soon as it has been read, keeping every file or none.
    ///
    /// When a later part is rejected or a store call fails, objects already
    /// written for this request are deleted in the background and the error
    /// is returned.
    pub async fn upload_parts(
        &self,
        parts: &mut MaterialParts<'_>,
    ) -> Result<Vec<UploadedMaterial>, HttpAppError> {
        let mut stored_objects: Vec<StoredObject> = Vec::new();
        let mut uploaded = Vec::new();

        loop {
            let file = match parts.next_file().await {
                Ok(Some(file)) => file,
                Ok(None) => break,
                Err(e) => {
                    self.discard(stored_objects);
                    return Err(e.into());
                }
            };
            let (original_name, content_type, kind) =
                (file.original_name.clone(), file.content_type.clone(), file.kind);
            match self.store(file).await {
                Ok(stored) => {
                    stored_objects.push(stored.clone());
                    uploaded.push(UploadedMaterial::from_stored(
                        stored,
                        original_name,
                        content_type,
                        kind,
                    ));
                }
                Err(e) => {
                    self.discard(stored_objects);
                    return Err(e);
                }
            }
        }

        Ok(uploaded)
    }

    async fn store(&self, file: IncomingFile) -> Result<StoredObject, HttpAppError> {
        let key = self.state.key_generator.generate(&file.original_name);
        let size = file.data.len();

        let object = UploadObject {
            key: key.clone(),
            folder: self.state.upload.folder.clone(),
            original_name: file.original_name,
            content_type: file.content_type,
            data: file.data,
            allowed_formats: DocumentKind::all_extensions()
                .into_iter()
                .map(String::from)
                .collect(),
        };

        tracing::debug!(
            storage_key = %key,
            kind = %file.kind,
            size = size,
            backend = %self.state.storage.backend_type(),
            "Uploading material"
        );

        let stored = self.state.storage.upload(object).await.map_err(|e| {
            tracing::error!(error = %e, storage_key = %key, "Remote store upload failed");
            HttpAppError::from(e)
        })?;

        tracing::info!(
            storage_key = %stored.key,
            public_id = %stored.public_id,
            size = stored.bytes,
            "Material stored"
        );

        Ok(stored)
    }

    fn discard(&self, stored_objects: Vec<StoredObject>) {
        if stored_objects.is_empty() {
            return;
        }

        let storage = self.state.storage.clone();
        tokio::spawn(async move {
            for object in stored_objects {
                if let Err(cleanup_err) = storage.delete(&object).await {
                    tracing::warn!(
                        error = %cleanup_err,
                        public_id = %object.public_id,
                        "Failed to clean up stored material after batch failure"
                    );
                }
            }
        });
    }
}
