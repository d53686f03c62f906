//! GemgradeErrorCode trait for API-boundary conversion.

/// Every error enum implements this to give callers a stable,
/// machine-readable code alongside the human message.
pub trait GemgradeErrorCode {
    /// Returns the error code string (e.g., "LOOKUP_UNAVAILABLE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const LOOKUP_UNAVAILABLE: &str = "LOOKUP_UNAVAILABLE";
pub const UNKNOWN_TABLE: &str = "UNKNOWN_TABLE";
pub const INVALID_IDENTIFIER: &str = "INVALID_IDENTIFIER";
pub const GRADE_ERROR: &str = "GRADE_ERROR";
