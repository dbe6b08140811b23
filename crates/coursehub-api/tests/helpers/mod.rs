//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p coursehub-api`.

#![allow(dead_code)]

pub mod fixtures;
pub mod storage;

use axum_test::TestServer;
use coursehub_api::constants;
use coursehub_api::setup::{empty_extension_policy, routes};
use coursehub_api::state::AppState;
use coursehub_core::Config;
use coursehub_storage::{KeyGenerator, Storage};
use std::sync::Arc;
use std::time::Duration;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Configuration as the binary would load it, with `overrides` as the environment.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::from_lookup(|key| {
        overrides
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
    .expect("Failed to build test config")
}

/// Build a test server around the given storage backend.
pub fn setup_test_app(storage: Arc<dyn Storage>, overrides: &[(&str, &str)]) -> TestServer {
    let config = test_config(overrides);
    let key_generator =
        KeyGenerator::default().with_empty_extension(empty_extension_policy(&config));
    let state = Arc::new(AppState::new(&config, storage, key_generator));
    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}

/// Wait for a condition with timeout.
pub async fn wait_for_condition<F>(condition: F, timeout: Duration) -> bool
where
    F: Fn() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    condition()
}
