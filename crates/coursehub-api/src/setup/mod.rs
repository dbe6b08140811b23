//! Application setup and initialization
//!
//! Everything `main` needs to turn a `Config` into a running router lives
//! here so integration tests can build the same app.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use coursehub_core::Config;
use coursehub_storage::{EmptyExtension, KeyGenerator};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    validation::validate_config(&config).context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(&config.environment);
    tracing::info!("Configuration loaded and validated successfully");

    let storage = storage::setup_storage(&config).await?;

    let key_generator =
        KeyGenerator::default().with_empty_extension(empty_extension_policy(&config));
    let state = Arc::new(AppState::new(&config, storage, key_generator));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

/// Key policy for uploads whose original name has no extension.
pub fn empty_extension_policy(config: &Config) -> EmptyExtension {
    if config.keep_empty_extension_dot {
        EmptyExtension::KeepDot
    } else {
        EmptyExtension::Omit
    }
}
