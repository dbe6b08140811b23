//! Storage key generation shared by all backends.
//!
//! Key format: `material-<epochMillis>-<sanitizedBaseName>.<extension>`.
//! The base name keeps only ASCII alphanumerics (everything else becomes `-`)
//! and the extension is lower-cased.

use coursehub_core::constants::STORAGE_KEY_PREFIX;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier of an uploaded object on the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extension segment, `None` when the key was generated without one.
    pub fn extension(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(_, ext)| ext)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Millisecond wall clock
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// What to emit for names without an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyExtension {
    /// `material-<ts>-README`
    #[default]
    Omit,
    /// `material-<ts>-README.`
    KeepDot,
}

/// Derives storage keys from original file names.
///
/// Timestamps are strictly increasing per generator: when the clock has not
/// advanced since the previous key, the last issued value plus one is used,
/// so no two keys from one process share a timestamp.
pub struct KeyGenerator {
    clock: Arc<dyn Clock>,
    empty_extension: EmptyExtension,
    last_issued: AtomicU64,
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl KeyGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            empty_extension: EmptyExtension::default(),
            last_issued: AtomicU64::new(0),
        }
    }

    pub fn with_empty_extension(mut self, policy: EmptyExtension) -> Self {
        self.empty_extension = policy;
        self
    }

    pub fn generate(&self, original_name: &str) -> StorageKey {
        let timestamp = self.next_timestamp();
        let (base, extension) = split_name(original_name);
        let base = sanitize_base(base);

        let key = if extension.is_empty() && self.empty_extension == EmptyExtension::Omit {
            format!("{}-{}-{}", STORAGE_KEY_PREFIX, timestamp, base)
        } else {
            format!("{}-{}-{}.{}", STORAGE_KEY_PREFIX, timestamp, base, extension)
        };
        StorageKey(key)
    }

    fn next_timestamp(&self) -> u64 {
        let now = self.clock.now_millis();
        let mut last = self.last_issued.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self.last_issued.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

/// Split on the last `.` into (base, lower-cased extension).
fn split_name(original_name: &str) -> (&str, String) {
    match original_name.rsplit_once('.') {
        Some((base, extension)) => (base, extension.to_lowercase()),
        None => (original_name, String::new()),
    }
}

fn sanitize_base(base: &str) -> String {
    base.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
