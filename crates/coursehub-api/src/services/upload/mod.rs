//! Learning-material upload pipeline: validated parts in, stored locators out.

mod service;
mod types;

pub use service::MaterialUploadService;
pub use types::{BatchUploadResponse, IncomingFile, MaterialUploadResponse, UploadedMaterial};
