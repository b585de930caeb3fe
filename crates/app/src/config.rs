//! Application configuration
//!
//! Loaded from `nearby.toml` in the platform config directory. Every field
//! has a default, so a missing file or a partial file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use nearby_core::{Coordinates, StoreOptions};
use nearby_net::{StatusConfig, SummaryConfig};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "nearby.toml";

/// Overrides the summary API key from the config file
pub const API_KEY_ENV: &str = "NEARBY_API_KEY";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid fixed location {value:?}: {reason}")]
    InvalidLocation { value: String, reason: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the database lives; defaults to the platform data directory
    pub data_dir: Option<PathBuf>,
    pub store: StoreOptions,
    pub geolocation: GeolocationConfig,
    pub summary: SummaryConfig,
    pub status: StatusConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub timeout_secs: u64,
    /// Position used by `--locate`, as `"lat,lon"`
    pub fixed: Option<String>,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: nearby_net::geolocation::DEFAULT_TIMEOUT.as_secs(),
            fixed: None,
        }
    }
}

impl GeolocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured fixed position, if any
    pub fn fixed_position(&self) -> Result<Option<Coordinates>, ConfigError> {
        let Some(value) = self.fixed.as_deref() else {
            return Ok(None);
        };

        value
            .parse()
            .map(Some)
            .map_err(|e: nearby_core::Error| ConfigError::InvalidLocation {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Config {
    /// Load `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.apply_api_key(key);
        }

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_api_key(&mut self, key: String) {
        if !key.trim().is_empty() {
            self.summary.api_key = Some(key);
        }
    }
}
