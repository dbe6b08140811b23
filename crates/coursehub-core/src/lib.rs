//! Coursehub Core Library
//!
//! This crate provides the document kinds, upload validation, error types and
//! configuration shared by the storage and API crates.

pub mod config;
pub mod constants;
pub mod document_kind;
pub mod error;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::{CloudinaryConfig, Config, LocalStorageConfig};
pub use document_kind::DocumentKind;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
pub use validation::{Rejection, UploadValidator, ValidationResult};
