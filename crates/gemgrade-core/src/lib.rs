//! # gemgrade-core
//!
//! Foundation crate for the gemstone grading engine.
//! Defines the measurement and field types, the rounding policy, the lookup
//! collaborator trait, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::GemgradeConfig;
pub use errors::{ConfigError, GemgradeErrorCode, GradeError, LookupError, StorageError};
pub use traits::GradeLookup;
pub use types::{
    checked_round_to_step, round_to_step, GradeQuery, GradeResult, MeasurementMap, NormalizedFieldSet, Step,
};
