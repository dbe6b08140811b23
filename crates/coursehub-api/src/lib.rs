//! Coursehub API Library
//!
//! This crate provides the HTTP upload endpoints for learning materials and
//! the application setup around them.

mod api_doc;
pub mod constants;
mod handlers;
mod middleware;
mod services;
pub mod setup;
mod telemetry;
mod utils;

pub mod error;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use services::upload::{BatchUploadResponse, MaterialUploadResponse, UploadedMaterial};
