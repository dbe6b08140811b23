//! Coursehub Storage Library
//!
//! This crate provides the storage abstraction for learning materials and its
//! implementations for Cloudinary and the local filesystem.
//!
//! # Storage key format
//!
//! Every backend stores objects under a logical folder using keys produced by
//! [`KeyGenerator`]: `material-<epochMillis>-<sanitizedBaseName>.<extension>`.
//! Key generation is centralized in the `keys` module so all backends stay
//! consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-cloudinary")]
pub mod cloudinary;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "storage-cloudinary")]
pub use cloudinary::CloudinaryStorage;
pub use coursehub_core::StorageBackend;
pub use factory::create_storage;
pub use keys::{Clock, EmptyExtension, FixedClock, KeyGenerator, StorageKey, SystemClock};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult, StoredObject, UploadObject};
