//! Tests for error codes and conversions.

use veta_core::errors::{
    AnalysisError, ConfigError, ValidationError, VetaErrorCode, VetoError,
};

#[test]
fn validation_error_code() {
    let err = ValidationError::missing("stratigraphy.reservoir_unit", "no_reservoir_unit");
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(err.to_string().contains("stratigraphy.reservoir_unit"));
    assert!(err.to_string().contains("no_reservoir_unit"));
}

#[test]
fn unknown_condition_code() {
    let err = VetoError::UnknownCondition {
        name: "no_dragons".to_string(),
    };
    assert_eq!(err.error_code(), "UNKNOWN_CONDITION");
    assert_eq!(err.coded_string(), "[UNKNOWN_CONDITION] unknown veto condition: no_dragons");
}

#[test]
fn analysis_error_keeps_subsystem_code() {
    let err: AnalysisError = ValidationError::LengthMismatch {
        left: "likelihoods".into(),
        left_len: 2,
        right: "uncertainties".into(),
        right_len: 3,
    }
    .into();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(matches!(err, AnalysisError::Validation(_)));

    let err: AnalysisError = ConfigError::FileNotFound {
        path: "veta.toml".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err: AnalysisError = VetoError::UnknownCondition { name: "x".into() }.into();
    assert_eq!(err.error_code(), "UNKNOWN_CONDITION");
}

#[test]
fn question_mark_converts_into_analysis_error() {
    fn inner() -> Result<(), ValidationError> {
        Err(ValidationError::invalid("likelihood.chemical", "must be positive"))
    }
    fn outer() -> veta_core::AnalysisResult<()> {
        inner()?;
        Ok(())
    }
    let err = outer().unwrap_err();
    assert_eq!(err.coded_string(), format!("[VALIDATION_ERROR] {err}"));
}
