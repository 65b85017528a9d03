//! Resolver configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Base URL of the static-image host.
pub const DEFAULT_BASE_URL: &str = "https://cdn.paperpod.app/storage/static-images";

/// Default maximum number of memoized URLs.
pub const DEFAULT_MAX_CACHE_SIZE: usize = 50;

/// Default per-request timeout for the HTTP fetcher, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading or persisting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration could not be serialized.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// Configuration file could not be parsed.
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Construction-time configuration for an [`ImageResolver`].
///
/// [`ImageResolver`]: crate::infrastructure::image::ImageResolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Base URL under which `large/`, `icons/` and `assets/` live.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum number of memoized URLs before eviction kicks in.
    #[serde(default = "default_max_cache_size")]
    pub max_cache_size: usize,

    /// Timeout applied by the HTTP fetcher, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_max_cache_size() -> usize {
    DEFAULT_MAX_CACHE_SIZE
}

const fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_cache_size: default_max_cache_size(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl ResolverConfig {
    /// Loads configuration from a TOML file, falling back to defaults
    /// for any missing field.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        info!(path = %path.display(), "Loaded resolver configuration");
        Ok(config)
    }

    /// Persists configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
