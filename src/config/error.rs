//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("top_n must be at least 1")]
    InvalidTopN,

    #[error("uta_segments must be at least 1")]
    InvalidUtaSegments,

    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Ideal point must be non-empty and finite")]
    InvalidIdealPoint,

    #[error("Echo field names cannot be empty")]
    EmptyEchoField,
}
