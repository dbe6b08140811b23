use crate::traits::{Storage, StorageError, StorageResult, StoredObject, UploadObject};
use crate::StorageBackend;
use async_trait::async_trait;
use coursehub_core::CloudinaryConfig;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Resource type sent on upload; the store classifies the file by content.
const AUTO_RESOURCE_TYPE: &str = "auto";

/// Cloudinary storage implementation
///
/// Uses signed uploads against the Cloudinary Upload API. Store errors are
/// returned unchanged in kind; nothing is retried here.
#[derive(Clone)]
pub struct CloudinaryStorage {
    client: Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
    resource_type: String,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    bytes: u64,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl CloudinaryStorage {
    /// Create a new CloudinaryStorage from validated account configuration
    pub fn new(config: &CloudinaryConfig) -> StorageResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                StorageError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(CloudinaryStorage {
            client,
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, resource_type: &str, action: &str) -> String {
        format!(
            "{}/v1_1/{}/{}/{}",
            self.api_base, self.cloud_name, resource_type, action
        )
    }

    fn signed_form(&self, params: BTreeMap<&'static str, String>) -> Form {
        let signature = sign_params(&params, &self.api_secret);
        let mut form = Form::new()
            .text("api_key", self.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (name, value) in params {
            form = form.text(name, value);
        }
        form
    }

    /// Turn a non-success response into `StorageError::Rejected`, keeping the store's message.
    async fn check_status(response: Response) -> StorageResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body
                }
            });

        Err(StorageError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Sign request parameters: sorted `key=value` pairs joined by `&`, then the
/// API secret appended, hashed with SHA-256 and hex encoded.
pub fn sign_params(params: &BTreeMap<&'static str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[async_trait]
impl Storage for CloudinaryStorage {
    async fn upload(&self, object: UploadObject) -> StorageResult<StoredObject> {
        let size = object.data.len() as u64;

        let mut params = BTreeMap::new();
        params.insert("folder", object.folder.clone());
        params.insert("public_id", object.key.to_string());
        params.insert("timestamp", unix_timestamp().to_string());
        if !object.allowed_formats.is_empty() {
            params.insert("allowed_formats", object.allowed_formats.join(","));
        }

        let file_part = Part::stream_with_length(object.data, size)
            .file_name(object.original_name.clone())
            .mime_str(&object.content_type)
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Invalid content type {}: {}",
                    object.content_type, e
                ))
            })?;
        let form = self.signed_form(params).part("file", file_part);

        let start = Instant::now();
        let response = self
            .client
            .post(self.endpoint(AUTO_RESOURCE_TYPE, "upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let uploaded: UploadResponse = response.json().await.map_err(|e| {
            StorageError::BackendError(format!("Unexpected upload response: {}", e))
        })?;

        tracing::info!(
            storage_key = %object.key,
            public_id = %uploaded.public_id,
            resource_type = %uploaded.resource_type,
            size = size,
            duration_ms = start.elapsed().as_millis() as u64,
            "Cloudinary upload completed"
        );

        Ok(StoredObject {
            key: object.key,
            public_id: uploaded.public_id,
            url: uploaded.secure_url,
            resource_type: uploaded.resource_type,
            format: uploaded.format,
            bytes: if uploaded.bytes > 0 { uploaded.bytes } else { size },
        })
    }

    async fn delete(&self, object: &StoredObject) -> StorageResult<()> {
        let mut params = BTreeMap::new();
        params.insert("public_id", object.public_id.clone());
        params.insert("timestamp", unix_timestamp().to_string());

        let response = self
            .client
            .post(self.endpoint(&object.resource_type, "destroy"))
            .multipart(self.signed_form(params))
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let destroyed: DestroyResponse = response.json().await.map_err(|e| {
            StorageError::BackendError(format!("Unexpected destroy response: {}", e))
        })?;

        if destroyed.result != "ok" {
            return Err(StorageError::DeleteFailed(format!(
                "{}: {}",
                object.public_id, destroyed.result
            )));
        }

        tracing::debug!(public_id = %object.public_id, "Cloudinary object deleted");
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Cloudinary
    }
}
