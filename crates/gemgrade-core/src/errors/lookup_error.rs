//! Lookup collaborator errors.
//!
//! A failed query is always one of these, never an empty row set: callers
//! must be able to tell "the table had no matching rows" apart from
//! "the table could not be read".

use super::error_code::{self, GemgradeErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup table {table} unavailable: {message}")]
    Unavailable { table: String, message: String },

    #[error("unknown lookup table: {0}")]
    UnknownTable(String),

    #[error("invalid table or column identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl GemgradeErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::LOOKUP_UNAVAILABLE,
            Self::UnknownTable(_) => error_code::UNKNOWN_TABLE,
            Self::InvalidIdentifier(_) => error_code::INVALID_IDENTIFIER,
            Self::Storage(e) => e.error_code(),
        }
    }
}
