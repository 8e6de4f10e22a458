//! Top-level analysis error aggregating subsystem errors.

use super::error_code::VetaErrorCode;
use super::{ConfigError, ValidationError, VetoError};

/// Errors that can occur anywhere in the decision pipeline.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Veto error: {0}")]
    Veto(#[from] VetoError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl VetaErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Veto(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Crate-wide result alias.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
