//! Error handling for the grading engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! Ordinary data gaps (malformed lines, missing or non-numeric fields,
//! unknown shapes) are never errors. Only lookup failures on the primary
//! grade table surface to callers.

pub mod config_error;
pub mod error_code;
pub mod grade_error;
pub mod lookup_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::GemgradeErrorCode;
pub use grade_error::{GradeError, GradeResolution};
pub use lookup_error::LookupError;
pub use storage_error::StorageError;
