//! FieldRule and ShapeProfile.

use std::collections::BTreeMap;

use gemgrade_core::constants::{DEFAULT_FIELD_ROUNDING, GRADE_LETTERS};
use gemgrade_core::{MeasurementMap, NormalizedFieldSet, Step};
use serde::Serialize;

/// Whether a field holds a number or a grade letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Numeric,
    GradeLetter,
}

/// How one normalized field is sourced and rounded.
///
/// `min`/`max`/`step` describe the selectable domain; they are not
/// enforced on mapped or derived values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub min: f64,
    pub max: f64,
    pub step: Step,
    /// Key in the measurement export. Fields without one are never mapped.
    pub source_key: Option<String>,
    /// Quantization applied when mapping. Defaults to 1 when unset.
    pub rounding: Option<Step>,
}

impl FieldRule {
    /// A numeric field over `min..=max` selectable in increments of `step`.
    pub fn numeric(min: f64, max: f64, step: f64) -> Self {
        debug_assert!(min <= max, "field rule min {min} > max {max}");
        debug_assert!(step > 0.0, "numeric field rule needs a positive step");
        Self {
            kind: FieldKind::Numeric,
            min,
            max,
            step: Step::from(step),
            source_key: None,
            rounding: None,
        }
    }

    /// A grade-letter field (`EX`, `VG`, `G`, `F`) read from `source_key`.
    pub fn grade_letter(source_key: &str) -> Self {
        Self {
            kind: FieldKind::GradeLetter,
            min: 0.0,
            max: 0.0,
            step: Step::ZERO,
            source_key: Some(source_key.to_string()),
            rounding: None,
        }
    }

    pub fn source(mut self, key: &str) -> Self {
        self.source_key = Some(key.to_string());
        self
    }

    pub fn rounding(mut self, step: f64) -> Self {
        self.rounding = Some(Step::from(step));
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == FieldKind::Numeric && !self.step.is_zero()
    }

    pub fn effective_rounding(&self) -> Step {
        self.rounding
            .unwrap_or_else(|| Step::from(DEFAULT_FIELD_ROUNDING))
    }

    /// Selectable values for this field, in order.
    ///
    /// Numeric fields enumerate `min..=max` by `step` (with a 1e-4
    /// tolerance on the upper bound), each value cut to two decimals with
    /// trailing zeros dropped. Grade-letter fields list the grade letters.
    pub fn options(&self) -> Vec<String> {
        match self.kind {
            FieldKind::GradeLetter => GRADE_LETTERS.iter().map(|g| g.to_string()).collect(),
            FieldKind::Numeric if self.is_numeric() => {
                let step = self.step.value();
                let mut options = Vec::new();
                let mut val = self.min;
                while val <= self.max + 0.0001 {
                    options.push(format_option(val));
                    val += step;
                }
                options
            }
            FieldKind::Numeric => Vec::new(),
        }
    }
}

fn format_option(val: f64) -> String {
    let cut = format!("{val:.2}").parse::<f64>().unwrap_or(val);
    cut.to_string()
}

/// A per-shape hook run after standard mapping.
pub type PostProcessFn = fn(&MeasurementMap, &NormalizedFieldSet) -> NormalizedFieldSet;

/// Post-processing attached to a profile. The returned fields are merged
/// over the standard ones, so a hook may both add and override.
#[derive(Debug, Clone, Copy, Default)]
pub enum PostProcess {
    #[default]
    None,
    /// Copy grade-letter fields verbatim; the numeric mapper skips them.
    GradeLetters,
    Custom(PostProcessFn),
}

impl PostProcess {
    pub fn apply(
        &self,
        profile: &ShapeProfile,
        raw: &MeasurementMap,
        current: &NormalizedFieldSet,
    ) -> NormalizedFieldSet {
        match self {
            Self::None => NormalizedFieldSet::new(),
            Self::GradeLetters => copy_grade_letters(profile, raw),
            Self::Custom(f) => f(raw, current),
        }
    }
}

fn copy_grade_letters(profile: &ShapeProfile, raw: &MeasurementMap) -> NormalizedFieldSet {
    profile
        .fields
        .iter()
        .filter(|(_, rule)| rule.kind == FieldKind::GradeLetter)
        .filter_map(|(name, rule)| {
            let value = raw.get(rule.source_key.as_deref()?)?;
            (!value.is_empty()).then(|| (name.clone(), value.to_string()))
        })
        .collect()
}

/// Named configuration of which fields a shape exposes and how each is
/// sourced and rounded.
#[derive(Debug, Clone)]
pub struct ShapeProfile {
    pub name: String,
    pub fields: BTreeMap<String, FieldRule>,
    pub post_process: PostProcess,
}

impl ShapeProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
            post_process: PostProcess::None,
        }
    }

    pub fn field(mut self, name: &str, rule: FieldRule) -> Self {
        self.fields.insert(name.to_string(), rule);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = (String, FieldRule)>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn post_process(mut self, post_process: PostProcess) -> Self {
        self.post_process = post_process;
        self
    }

    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }
}
