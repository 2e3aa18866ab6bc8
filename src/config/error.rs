//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("Tax rate must be between 0.0 and 1.0")]
    InvalidTaxRate,

    #[error("Labor rate must be positive")]
    InvalidLaborRate,

    #[error("Labor factor for {0} must be positive")]
    InvalidLaborFactor(&'static str),
}
