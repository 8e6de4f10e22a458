//! Veto taxonomy errors.

use super::error_code::{self, VetaErrorCode};

/// Errors raised by veto taxonomy lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VetoError {
    #[error("unknown veto condition: {name}")]
    UnknownCondition { name: String },
}

impl VetaErrorCode for VetoError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCondition { .. } => error_code::UNKNOWN_CONDITION,
        }
    }
}
