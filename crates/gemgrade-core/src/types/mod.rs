//! Value types shared across the workspace.

pub mod fields;
pub mod grades;
pub mod measurement;
pub mod step;

pub use fields::NormalizedFieldSet;
pub use grades::{GradeQuery, GradeResult};
pub use measurement::MeasurementMap;
pub use step::{
    checked_round_to_step, checked_round_value, round_to_step, round_value, InvalidStep, Step,
};
