//! API constants

/// API base path prefix (version-independent)
pub const API_BASE: &str = "/api";

/// Current API version segment
pub const API_VERSION: &str = "v0";

/// Versioned prefix for all material routes
pub const API_PREFIX: &str = "/api/v0";

/// Multipart field carrying the file on the single-upload route
pub const SINGLE_FILE_FIELD: &str = "file";

/// Multipart field carrying the files on the batch route
pub const BATCH_FILES_FIELD: &str = "files";

/// Slack added to the request body limit for multipart framing and text fields
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;
