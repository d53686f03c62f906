//! Grade resolution errors and non-fatal error collection.

use super::error_code::{self, GemgradeErrorCode};
use super::LookupError;

/// Hard failures of grade resolution.
///
/// Only the primary (KGS / fish-eye) table is load-bearing; bowtie lookup
/// failures are recovered and land in [`GradeResolution::errors`].
#[derive(Debug, thiserror::Error)]
pub enum GradeError {
    #[error("primary grade lookup on {table} failed: {source}")]
    PrimaryLookup {
        table: String,
        #[source]
        source: LookupError,
    },
}

impl GemgradeErrorCode for GradeError {
    fn error_code(&self) -> &'static str {
        error_code::GRADE_ERROR
    }
}

/// Result of a grade resolution that accumulates non-fatal errors.
/// Allows partial grades to be returned when an optional lookup fails.
#[derive(Debug, Default)]
pub struct GradeResolution<T: Default> {
    /// The resolved data.
    pub grades: T,
    /// Non-fatal lookup errors collected during resolution.
    pub errors: Vec<LookupError>,
}

impl<T: Default> GradeResolution<T> {
    pub fn new(grades: T) -> Self {
        Self {
            grades,
            errors: Vec::new(),
        }
    }

    /// Record a non-fatal error.
    pub fn add_error(&mut self, error: LookupError) {
        self.errors.push(error);
    }

    /// Returns true if no non-fatal errors were recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
