use std::{env, path::PathBuf, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding uploaded images (default: "www/images")
    pub images_dir: PathBuf,
    /// Squad registry file (default: "www/data/squads.db")
    pub registry_path: PathBuf,
    /// Maximum accepted request body in bytes (default: 10 MiB)
    pub max_upload_bytes: usize,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARMORY_IMAGES_DIR` - Image directory (default: "www/images")
    /// - `ARMORY_REGISTRY_PATH` - Squad registry file (default: "www/data/squads.db")
    /// - `ARMORY_MAX_UPLOAD_BYTES` - Request body limit (default: 10,485,760)
    /// - `ARMORY_REQUEST_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            images_dir: lookup("ARMORY_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("www/images")),
            registry_path: lookup("ARMORY_REGISTRY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("www/data/squads.db")),
            max_upload_bytes: lookup("ARMORY_MAX_UPLOAD_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
            request_timeout_seconds: lookup("ARMORY_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
