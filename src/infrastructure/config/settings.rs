//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets come only from the
//! environment (`LIBRARY_API_KEY`, `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`).
//!
//! # Example
//!
//! ```no_run
//! use bookwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("bookwatch.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::catalog::{CatalogConfig, TITLE_PLACEHOLDER};
use super::logging::LoggingConfig;
use super::storage::StorageConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::library::LibraryApiSettings;
use crate::error::{ConfigError, Result};

/// Environment variable holding the catalog API key.
pub const API_KEY_ENV: &str = "LIBRARY_API_KEY";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog API, pacing and branch directory.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Status file and watch list locations.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Telegram notification configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Catalog API key from `LIBRARY_API_KEY`.
    ///
    /// Never read from the config file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the API key from the `LIBRARY_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let catalog = &self.catalog;
        if catalog.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        url::Url::parse(&catalog.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "api_url",
            reason: e.to_string(),
        })?;
        if catalog.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if catalog.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if catalog.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrency",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if catalog.default_branch.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "default_branch",
            }
            .into());
        }
        if !catalog.reserve_url_template.contains(TITLE_PLACEHOLDER) {
            return Err(ConfigError::InvalidValue {
                field: "reserve_url_template",
                reason: format!("must contain {TITLE_PLACEHOLDER}"),
            }
            .into());
        }
        if let Some(entry) = catalog
            .branches
            .iter()
            .find(|entry| entry.code.trim().is_empty() || entry.name.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "branches",
                reason: format!("entry '{}' needs both a code and a name", entry.code),
            }
            .into());
        }
        if self.telegram.search_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Catalog client settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `LIBRARY_API_KEY` is unset.
    #[allow(clippy::result_large_err)]
    pub fn library_settings(&self) -> Result<LibraryApiSettings> {
        let api_key = self
            .api_key
            .clone()
            .ok_or(ConfigError::MissingField { field: API_KEY_ENV })?;
        Ok(LibraryApiSettings {
            api_url: self.catalog.api_url.clone(),
            api_key,
            timeout: self.catalog.timeout(),
            page_size: self.catalog.page_size,
        })
    }
}
