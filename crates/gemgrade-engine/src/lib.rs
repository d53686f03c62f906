//! # gemgrade-engine
//!
//! Turns a `KEY=VALUE` measurement export into a normalized field set and
//! resolves performance grades against shape-specific lookup tables.
//!
//! raw text → [`parser`] → `MeasurementMap` → [`shapes`] (profile
//! resolution) → [`derivation`] + [`mapper`] → `NormalizedFieldSet` →
//! [`grading`] → `GradeResult`.

pub mod derivation;
pub mod grading;
pub mod mapper;
pub mod parser;
pub mod pipeline;
pub mod shapes;

pub use grading::{resolve_grades, GradeResolver, InMemoryLookup};
pub use parser::parse_measurements;
pub use pipeline::{compute_normalized_fields, FieldPipeline};
pub use shapes::{FieldRule, PostProcess, ShapeProfile, ShapeRegistry};
