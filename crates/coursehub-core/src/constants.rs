/// Per-file upload ceiling (50 MiB).
pub const MAX_UPLOAD_SIZE_BYTES: usize = 50 * 1024 * 1024;

/// Upper bound on parts accepted by the batch endpoint.
pub const MAX_FILES_PER_REQUEST: usize = 10;

/// Logical folder every learning material lands in on the remote store.
pub const UPLOAD_FOLDER: &str = "learning_materials";

/// Prefix of every generated storage key.
pub const STORAGE_KEY_PREFIX: &str = "material";
