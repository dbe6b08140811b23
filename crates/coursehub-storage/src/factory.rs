#[cfg(feature = "storage-cloudinary")]
use crate::CloudinaryStorage;
#[cfg(feature = "storage-local")]
use crate::LocalStorage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use coursehub_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        #[cfg(feature = "storage-cloudinary")]
        StorageBackend::Cloudinary => {
            let cloudinary = config.cloudinary.as_ref().ok_or_else(|| {
                StorageError::ConfigError("Cloudinary credentials not configured".to_string())
            })?;
            Ok(Arc::new(CloudinaryStorage::new(cloudinary)?))
        }

        #[cfg(not(feature = "storage-cloudinary"))]
        StorageBackend::Cloudinary => Err(StorageError::ConfigError(
            "Cloudinary storage backend not available (storage-cloudinary feature not enabled)"
                .to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let local = config.local_storage.as_ref().ok_or_else(|| {
                StorageError::ConfigError(
                    "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL not configured".to_string(),
                )
            })?;
            let storage = LocalStorage::new(&local.base_path, local.base_url.clone()).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}

#[cfg(all(test, feature = "storage-local"))]
mod tests {
    use super::*;
    use coursehub_core::LocalStorageConfig;

    fn base_config() -> Config {
        Config::from_lookup(|name| match name {
            "STORAGE_BACKEND" => Some("local".to_string()),
            "LOCAL_STORAGE_PATH" => Some("/tmp/unused".to_string()),
            "LOCAL_STORAGE_BASE_URL" => Some("http://localhost:4000".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn builds_local_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = base_config();
        config.local_storage = Some(LocalStorageConfig {
            base_path: dir.path().display().to_string(),
            base_url: "http://localhost:4000".to_string(),
        });

        let storage = create_storage(&config).await.unwrap();
        assert_eq!(storage.backend_type(), StorageBackend::Local);
    }

    #[tokio::test]
    async fn missing_cloudinary_credentials_is_config_error() {
        let mut config = base_config();
        config.storage_backend = StorageBackend::Cloudinary;
        config.cloudinary = None;

        assert!(matches!(
            create_storage(&config).await,
            Err(StorageError::ConfigError(_))
        ));
    }
}
