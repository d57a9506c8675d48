//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing subscriber could not be installed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Message delimiter must not be empty")]
    EmptyDelimiter,

    #[error("Message delimiter must use non-whitespace ASCII control characters, found {0:?}")]
    InvalidDelimiterChar(char),

    #[error("Log level filter must not be empty")]
    EmptyLogLevel,

    #[error("Invalid log level filter: {0}")]
    InvalidLogLevel(String),
}
