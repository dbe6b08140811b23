use crate::traits::{Storage, StorageError, StorageResult, StoredObject, UploadObject};
use crate::StorageBackend;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Intended for development; files land under `{base_path}/{folder}/{key}`
/// and are served from `{base_url}/{folder}/{key}`.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/var/lib/coursehub/materials")
    /// * `base_url` - Base URL for serving files (e.g., "http://localhost:4000/materials")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Resolve `folder/key` below the base directory, refusing anything that could escape it.
    fn key_to_path(&self, relative: &str) -> StorageResult<PathBuf> {
        let escapes = Path::new(relative)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if relative.is_empty() || escapes || relative.contains('\\') {
            return Err(StorageError::InvalidKey(format!(
                "Storage key resolves outside storage directory: {}",
                relative
            )));
        }

        Ok(self.base_path.join(relative))
    }

    fn generate_url(&self, relative: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), relative)
    }
}

fn relative_key(folder: &str, key: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", folder, key)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(&self, object: UploadObject) -> StorageResult<StoredObject> {
        let relative = relative_key(&object.folder, object.key.as_str());
        let path = self.key_to_path(&relative)?;
        let size = object.data.len();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&object.data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %object.key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(StoredObject {
            url: self.generate_url(&relative),
            format: object.key.extension().filter(|e| !e.is_empty()).map(String::from),
            key: object.key,
            public_id: relative,
            resource_type: "raw".to_string(),
            bytes: size as u64,
        })
    }

    async fn delete(&self, object: &StoredObject) -> StorageResult<()> {
        let path = self.key_to_path(&object.public_id)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %object.key,
            "Local storage delete successful"
        );
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
