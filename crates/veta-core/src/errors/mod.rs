//! Error handling for Veta.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Negative geological outcomes (a veto, a kill factor, a failed mandatory
//! condition) are ordinary results, never errors. Only malformed input and
//! misuse end up here.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod validation_error;
pub mod veto_error;

pub use analysis_error::{AnalysisError, AnalysisResult};
pub use config_error::ConfigError;
pub use error_code::VetaErrorCode;
pub use validation_error::ValidationError;
pub use veto_error::VetoError;
