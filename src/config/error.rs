//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("AI base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("AI max retries must be at most {0}")]
    InvalidRetryLimit(u32),

    #[error("Mock batch limit must be at least 1")]
    InvalidBatchLimit,

    #[error("Poll interval must be between 1 and 60 seconds")]
    InvalidPollInterval,

    #[error("Session TTL and sweep interval must be at least 1 second")]
    InvalidSessionTtl,
}
