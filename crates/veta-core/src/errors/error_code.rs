//! VetaErrorCode trait for transport-boundary conversion.

/// Every error enum implements this to expose a stable code string that
/// survives any process boundary the results are shipped across.
pub trait VetaErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const UNKNOWN_CONDITION: &str = "UNKNOWN_CONDITION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
