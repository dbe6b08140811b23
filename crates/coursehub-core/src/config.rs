//! Configuration module
//!
//! Configuration is read once at process start into an explicit [`Config`]
//! that is passed by reference to whatever needs it. Missing media-host
//! credentials fail [`Config::validate`] at startup instead of surfacing on
//! the first upload.

use std::env;

use crate::constants::{MAX_FILES_PER_REQUEST, MAX_UPLOAD_SIZE_BYTES, UPLOAD_FOLDER};
use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 4000;
const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com";
const CLOUDINARY_TIMEOUT_SECS: u64 = 120;

/// Cloudinary account credentials
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

// Keep the secret out of logs.
impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Filesystem backend settings (development and tests)
#[derive(Clone, Debug)]
pub struct LocalStorageConfig {
    pub base_path: String,
    pub base_url: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub storage_backend: StorageBackend,
    pub cloudinary: Option<CloudinaryConfig>,
    pub local_storage: Option<LocalStorageConfig>,
    pub upload_folder: String,
    pub max_file_size_bytes: usize,
    pub max_files_per_request: usize,
    /// Keep a dangling `.` on keys generated for extension-less names.
    pub keep_empty_extension_dot: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from an arbitrary variable source. Does not validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match var("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(backend) => backend.parse()?,
            None => StorageBackend::Cloudinary,
        };

        let cloudinary = match (
            var("CLOUDINARY_CLOUD_NAME"),
            var("CLOUDINARY_API_KEY"),
            var("CLOUDINARY_API_SECRET"),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryConfig {
                cloud_name,
                api_key,
                api_secret,
                api_base: var("CLOUDINARY_API_BASE")
                    .unwrap_or_else(|| CLOUDINARY_API_BASE.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout_secs: var("CLOUDINARY_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(CLOUDINARY_TIMEOUT_SECS),
            }),
            _ => None,
        };

        let local_storage = match (var("LOCAL_STORAGE_PATH"), var("LOCAL_STORAGE_BASE_URL")) {
            (Some(base_path), Some(base_url)) => Some(LocalStorageConfig {
                base_path,
                base_url,
            }),
            _ => None,
        };

        let max_upload_mb = var("MAX_UPLOAD_SIZE_MB").and_then(|s| s.parse::<usize>().ok());
        let max_file_size_bytes = match max_upload_mb {
            Some(mb) => mb
                .checked_mul(1024 * 1024)
                .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large"))?,
            None => MAX_UPLOAD_SIZE_BYTES,
        };

        let max_files_per_request = var("MAX_FILES_PER_REQUEST")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_FILES_PER_REQUEST);

        let keep_empty_extension_dot = var("STORAGE_KEY_KEEP_EMPTY_EXTENSION_DOT")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Config {
            server_port,
            environment,
            cors_origins,
            storage_backend,
            cloudinary,
            local_storage,
            upload_folder: var("UPLOAD_FOLDER").unwrap_or_else(|| UPLOAD_FOLDER.to_string()),
            max_file_size_bytes,
            max_files_per_request,
            keep_empty_extension_dot,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
        }

        if self.max_files_per_request == 0 {
            return Err(anyhow::anyhow!("MAX_FILES_PER_REQUEST cannot be 0"));
        }

        if self.upload_folder.contains("..") || self.upload_folder.starts_with('/') {
            return Err(anyhow::anyhow!(
                "UPLOAD_FOLDER must be a relative folder name"
            ));
        }

        match self.storage_backend {
            StorageBackend::Cloudinary => {
                if self.cloudinary.is_none() {
                    return Err(anyhow::anyhow!(
                        "CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET must be set when using the cloudinary storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL must be set when using the local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const CLOUDINARY_VARS: [(&str, &str); 3] = [
        ("CLOUDINARY_CLOUD_NAME", "demo"),
        ("CLOUDINARY_API_KEY", "123456"),
        ("CLOUDINARY_API_SECRET", "s3cr3t"),
    ];

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&CLOUDINARY_VARS).unwrap();
        assert_eq!(config.server_port, 4000);
        assert_eq!(config.storage_backend, StorageBackend::Cloudinary);
        assert_eq!(config.upload_folder, "learning_materials");
        assert_eq!(config.max_file_size_bytes, 50 * 1024 * 1024);
        assert_eq!(config.max_files_per_request, 10);
        assert!(!config.keep_empty_extension_dot);
        assert_eq!(
            config.cloudinary.as_ref().unwrap().api_base,
            "https://api.cloudinary.com"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_credentials_fail_fast() {
        let config = config_from(&[("CLOUDINARY_CLOUD_NAME", "demo")]).unwrap();
        assert!(config.cloudinary.is_none());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("CLOUDINARY_API_SECRET"));
    }

    #[test]
    fn local_backend_requires_path_and_url() {
        let config = config_from(&[("STORAGE_BACKEND", "local")]).unwrap();
        assert!(config.validate().is_err());

        let config = config_from(&[
            ("STORAGE_BACKEND", "local"),
            ("LOCAL_STORAGE_PATH", "/tmp/materials"),
            ("LOCAL_STORAGE_BASE_URL", "http://localhost:4000/files"),
        ])
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn wildcard_cors_rejected_in_production() {
        let mut vars = CLOUDINARY_VARS.to_vec();
        vars.push(("ENVIRONMENT", "production"));
        let config = config_from(&vars).unwrap();
        assert!(config.is_production());
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn upload_ceiling_that_overflows_is_an_error() {
        let too_large = usize::MAX.to_string();
        let err = config_from(&[("MAX_UPLOAD_SIZE_MB", too_large.as_str())]).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_SIZE_MB"));

        let config = config_from(&[("MAX_UPLOAD_SIZE_MB", "20")]).unwrap();
        assert_eq!(config.max_file_size_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = config_from(&CLOUDINARY_VARS).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("<redacted>"));
    }
}
