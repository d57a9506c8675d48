//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SHAREHOLDER_TALLY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use shareholder_tally::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Failed to load configuration");
//! config.logging.init_tracing().expect("Failed to install tracing");
//! ```

mod codec;
mod error;
mod logging;

pub use codec::CodecConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so loading succeeds with no variables set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Wire codec configuration (delimiter, pretty printing)
    #[serde(default)]
    pub codec: CodecConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SHAREHOLDER_TALLY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SHAREHOLDER_TALLY__CODEC__PRETTY_PRINT=true` -> `codec.pretty_print = true`
    /// - `SHAREHOLDER_TALLY__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SHAREHOLDER_TALLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if loading fails and
    /// `ConfigError::ValidationFailed` if a value is invalid.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.codec.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
