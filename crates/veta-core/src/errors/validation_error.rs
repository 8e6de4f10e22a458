//! Input validation errors.

use super::error_code::{self, VetaErrorCode};

/// Raised when the caller supplied a target or vector the core cannot
/// evaluate. Missing fields are reported explicitly, never defaulted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{field}` for condition `{condition}`")]
    MissingField { field: String, condition: String },

    #[error("field `{field}` is empty but required by condition `{condition}`")]
    EmptyField { field: String, condition: String },

    #[error("invalid value for `{field}`: {message}")]
    InvalidValue { field: String, message: String },

    #[error("length mismatch: {left} has {left_len} entries, {right} has {right_len}")]
    LengthMismatch {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },
}

impl ValidationError {
    pub fn missing(field: &str, condition: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
            condition: condition.to_string(),
        }
    }

    pub fn empty(field: &str, condition: &str) -> Self {
        Self::EmptyField {
            field: field.to_string(),
            condition: condition.to_string(),
        }
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl VetaErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
