use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pagefeed/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pagefeed").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns `Config::default()` if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Page size is positive
    /// - Viewport shows at least one row
    /// - Fetch timeout, if set, is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paging.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "paging.page_size must be greater than 0".to_string(),
            });
        }

        if self.view.viewport_rows == 0 {
            return Err(ConfigError::ValidationError {
                message: "view.viewport_rows must be greater than 0".to_string(),
            });
        }

        if self.source.fetch_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "source.fetch_timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
