//! Multipart extraction for material uploads.
//!
//! Parts are validated while they stream in: the declared MIME type is
//! checked as soon as the part headers arrive and the size ceiling after
//! every chunk, so a rejected part is never fully buffered. Parts are handed
//! out one at a time; only the part being read is held in memory.

use crate::services::upload::IncomingFile;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::BytesMut;
use coursehub_core::{AppError, DocumentKind, Rejection, UploadValidator};

const UNKNOWN_FILE_NAME: &str = "unknown";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Request body too large: {}", e.body_text()))
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", e.body_text()))
    }
}

fn validate_part(
    validator: &UploadValidator,
    file_name: &str,
    content_type: &str,
    size: usize,
) -> Result<DocumentKind, Rejection> {
    validator
        .validate(content_type, size)
        .into_result()
        .inspect_err(|rejection| {
            tracing::debug!(
                file_name = %file_name,
                reason = %rejection,
                "Rejected material upload"
            );
        })
}

/// Validated file parts named `field_name`, read one at a time.
///
/// Fields with other names are skipped. At least one matching part is
/// required and at most `max_files` are accepted.
pub struct MaterialParts<'a> {
    multipart: Multipart,
    field_name: &'a str,
    max_files: usize,
    validator: UploadValidator,
    read: usize,
}

impl<'a> MaterialParts<'a> {
    pub fn new(
        multipart: Multipart,
        field_name: &'a str,
        max_files: usize,
        validator: UploadValidator,
    ) -> Self {
        Self {
            multipart,
            field_name,
            max_files,
            validator,
            read: 0,
        }
    }

    /// Next accepted part, or `None` once the body is exhausted.
    pub async fn next_file(&mut self) -> Result<Option<IncomingFile>, AppError> {
        while let Some(mut field) = self.multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(self.field_name) {
                continue;
            }

            if self.read == self.max_files {
                return Err(AppError::InvalidInput(if self.max_files == 1 {
                    format!(
                        "Multiple file fields are not allowed; send exactly one field named '{}'",
                        self.field_name
                    )
                } else {
                    format!(
                        "Too many files; at most {} are allowed per request",
                        self.max_files
                    )
                }));
            }

            let original_name = field
                .file_name()
                .map(String::from)
                .unwrap_or_else(|| UNKNOWN_FILE_NAME.to_string());
            let content_type = field
                .content_type()
                .map(String::from)
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

            let kind = validate_part(&self.validator, &original_name, &content_type, 0)?;

            let mut data = BytesMut::new();
            while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                data.extend_from_slice(&chunk);
                validate_part(&self.validator, &original_name, &content_type, data.len())?;
            }

            self.read += 1;
            return Ok(Some(IncomingFile {
                original_name,
                content_type,
                kind,
                data: data.freeze(),
            }));
        }

        if self.read == 0 {
            return Err(AppError::InvalidInput(format!(
                "No file provided; expected a multipart field named '{}'",
                self.field_name
            )));
        }

        Ok(None)
    }

    /// Drain the remaining fields; a matching part past `max_files` is an error.
    pub async fn finish(&mut self) -> Result<(), AppError> {
        while self.next_file().await?.is_some() {}
        Ok(())
    }
}
