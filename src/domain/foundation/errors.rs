//! Error types for the domain layer.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidDimensions,
    UnknownOptionKey,
    IncompleteConfiguration,
    IndexOutOfRange,

    // State errors
    InvalidStateTransition,
    WorkflowBusy,

    // Collaborator errors
    ProjectNotFound,
    StorageError,
    RenderError,
    PricingError,
    IdentityError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidDimensions => "INVALID_DIMENSIONS",
            ErrorCode::UnknownOptionKey => "UNKNOWN_OPTION_KEY",
            ErrorCode::IncompleteConfiguration => "INCOMPLETE_CONFIGURATION",
            ErrorCode::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::WorkflowBusy => "WORKFLOW_BUSY",
            ErrorCode::ProjectNotFound => "PROJECT_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::RenderError => "RENDER_ERROR",
            ErrorCode::PricingError => "PRICING_ERROR",
            ErrorCode::IdentityError => "IDENTITY_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an error for a selection key absent from the active catalog.
    pub fn unknown_option_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(
            ErrorCode::UnknownOptionKey,
            format!("Option key '{}' is not in the active catalog", key),
        )
        .with_detail("key", key)
    }

    /// Creates an error for a removal with an invalid position.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::IndexOutOfRange,
            format!("Index {} is out of range for {} items", index, len),
        )
        .with_detail("index", index.to_string())
        .with_detail("len", len.to_string())
    }

    /// Creates an error for a configuration missing required step data.
    pub fn incomplete_configuration(missing: impl Into<String>) -> Self {
        let missing = missing.into();
        Self::new(
            ErrorCode::IncompleteConfiguration,
            format!("Configuration is incomplete: {} missing", missing),
        )
        .with_detail("missing", missing)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}
