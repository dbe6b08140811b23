//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use coursehub_core::{Config, StorageBackend};

/// Validate critical configuration values, failing fast on anything that
/// would break uploads at request time.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.is_production() && config.storage_backend == StorageBackend::Local {
        tracing::warn!(
            "Local storage backend in production - materials are only stored on this host"
        );
    }

    if let Some(cloudinary) = &config.cloudinary {
        if !cloudinary.api_base.starts_with("https://") {
            tracing::warn!(
                api_base = %cloudinary.api_base,
                "CLOUDINARY_API_BASE is not HTTPS - signed requests travel unencrypted"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &'static [(&'static str, &'static str)]) -> Config {
        Config::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap()
    }

    #[test]
    fn accepts_complete_cloudinary_config() {
        let config = config(&[
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_API_KEY", "123456"),
            ("CLOUDINARY_API_SECRET", "abcd"),
        ]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_missing_credentials() {
        let config = config(&[("CLOUDINARY_CLOUD_NAME", "demo")]);
        assert!(validate_config(&config).is_err());
    }
}
