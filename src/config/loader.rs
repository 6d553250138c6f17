use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Largest page the catalog accepts for a single list fetch.
pub const MAX_PAGE_SIZE: u32 = 100;

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
    /// Uses `~/.config/pokedex/config.toml` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pokedex").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

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
    /// - The catalog base URL is an absolute http(s) URL
    /// - The page size is within 1..=MAX_PAGE_SIZE
    /// - Timeouts and the tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.catalog.base_url;
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::ValidationError {
                    message: format!("Unsupported URL scheme '{}' in base_url", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::ValidationError {
                    message: format!("Invalid base_url '{}': {}", base_url, e),
                });
            }
        }

        let page_size = self.catalog.page_size;
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "page_size must be between 1 and {}, got {}",
                    MAX_PAGE_SIZE, page_size
                ),
            });
        }

        if self.catalog.timeout_seconds == 0 || self.catalog.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
