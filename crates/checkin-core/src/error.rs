//! Error types for checkin-core.

use thiserror::Error;
use uuid::Uuid;

use crate::types::ValidationError;

/// Top-level error type for check-in operations.
#[derive(Debug, Error)]
pub enum CheckinError {
    #[error("Check-in not found: {id}")]
    CheckinNotFound { id: Uuid },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for CheckinError {
    fn from(err: serde_json::Error) -> Self {
        CheckinError::Serialization(err.to_string())
    }
}

impl From<ValidationError> for CheckinError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::OutOfBounds { field, .. } => CheckinError::Validation {
                field: field.to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for check-in operations.
pub type CheckinResult<T> = Result<T, CheckinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckinError::CheckinNotFound { id: Uuid::nil() };
        assert!(err.to_string().contains("Check-in not found"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: CheckinError = ValidationError::OutOfBounds {
            field: "calm",
            value: 130,
            max: 100,
        }
        .into();
        match err {
            CheckinError::Validation { field, message } => {
                assert_eq!(field, "calm");
                assert!(message.contains("130"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
