//! Grade query projection and grade results.

use serde::{Deserialize, Serialize};

use super::NormalizedFieldSet;
use crate::constants::{
    FIELD_CROWN, FIELD_HALVES_ANGLE_AVG, FIELD_PAVILION_DEPTH, FIELD_SHAPE, FIELD_TABLE_WIDTH,
};

/// The subset of a [`NormalizedFieldSet`] needed to resolve grades.
///
/// Values stay as the formatted strings produced by mapping; the resolver
/// decides whether they are numeric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeQuery {
    pub shape: String,
    pub table_width: Option<String>,
    pub crown_angle: Option<String>,
    pub pavilion_depth: Option<String>,
    pub halves_angle_avg: Option<String>,
}

impl GradeQuery {
    pub fn new(
        shape: impl Into<String>,
        table_width: Option<&str>,
        crown_angle: Option<&str>,
        pavilion_depth: Option<&str>,
        halves_angle_avg: Option<&str>,
    ) -> Self {
        Self {
            shape: shape.into(),
            table_width: table_width.map(str::to_string),
            crown_angle: crown_angle.map(str::to_string),
            pavilion_depth: pavilion_depth.map(str::to_string),
            halves_angle_avg: halves_angle_avg.map(str::to_string),
        }
    }

    /// Project a field set. A missing `shape` field yields an empty shape,
    /// which selects no tables.
    pub fn from_fields(fields: &NormalizedFieldSet) -> Self {
        Self::new(
            fields.get(FIELD_SHAPE).unwrap_or_default(),
            fields.get(FIELD_TABLE_WIDTH),
            fields.get(FIELD_CROWN),
            fields.get(FIELD_PAVILION_DEPTH),
            fields.get(FIELD_HALVES_ANGLE_AVG),
        )
    }
}

/// Three independently resolved grades. `None` means "no matching row" or
/// "insufficient input", never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// KGS grade.
    pub primary: Option<f64>,
    /// Bowtie grade.
    pub secondary: Option<f64>,
    /// Fish-eye grade.
    pub tertiary: Option<f64>,
}

impl GradeResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.tertiary.is_none()
    }

    pub fn kgs(&self) -> Option<f64> {
        self.primary
    }

    pub fn bowtie(&self) -> Option<f64> {
        self.secondary
    }

    pub fn fish_eye(&self) -> Option<f64> {
        self.tertiary
    }
}
