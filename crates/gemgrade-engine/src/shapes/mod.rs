//! Shape registry: per-shape field rules and variant detection.
//!
//! Shape-specific behavior lives in data (one [`ShapeProfile`] per shape)
//! plus a small set of detectors and post-processing hooks, not in
//! branches of the generic mapper.

pub mod library;
pub mod profile;
pub mod registry;
pub mod variants;

pub use profile::{FieldKind, FieldRule, PostProcess, PostProcessFn, ShapeProfile};
pub use registry::{ResolvedShape, ShapeRegistry};
pub use variants::VariantDetector;
