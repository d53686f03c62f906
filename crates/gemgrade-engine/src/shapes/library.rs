//! The built-in shape library.

use std::collections::BTreeMap;

use gemgrade_core::constants::*;

use super::profile::{FieldRule, PostProcess, ShapeProfile};
use super::variants::{
    MARQ_4_MAINS, MARQ_8_MAINS, OVAL_4_MAINS, OVAL_8_MAINS, PEAR_4_MAINS, PEAR_8_MAINS,
};

/// Fields every library shape exposes.
pub fn common_fields() -> BTreeMap<String, FieldRule> {
    [
        (
            FIELD_TABLE_WIDTH,
            FieldRule::numeric(48.0, 72.0, 1.0)
                .source(KEY_WIDTH_TABLE)
                .rounding(1.0),
        ),
        (
            FIELD_CROWN,
            FieldRule::numeric(28.0, 48.0, 0.5)
                .source(KEY_CROWN_CURVE_ANGLE)
                .rounding(0.5),
        ),
        (
            FIELD_PAVILION_DEPTH,
            FieldRule::numeric(35.0, 55.0, 0.2)
                .source(KEY_PAVILION_DEPTH)
                .rounding(0.2),
        ),
        // Derived only; no export key.
        (FIELD_HALVES_ANGLE, FieldRule::numeric(35.1, 48.0, 0.1)),
        (
            FIELD_LOWER_LHL,
            FieldRule::numeric(65.0, 85.0, 1.0)
                .source(KEY_GIRDLE_FACET_LENGTH)
                .rounding(1.0),
        ),
        (
            FIELD_STAR_RATIO,
            FieldRule::numeric(35.0, 65.0, 1.0)
                .source(KEY_STAR_RATIO)
                .rounding(1.0),
        ),
        (
            FIELD_HA_D,
            FieldRule::numeric(40.0, 42.0, 0.5)
                .source(KEY_HA_D)
                .rounding(0.5),
        ),
        (
            FIELD_CROWN_HEIGHT,
            FieldRule::numeric(0.0, 100.0, 0.5)
                .source(KEY_CROWN_CURVE_HEIGHT)
                .rounding(0.5),
        ),
        (FIELD_AZIMUTH, FieldRule::grade_letter(KEY_AZIMUTH)),
        (FIELD_SYMMETRY, FieldRule::grade_letter(KEY_SYMMETRY)),
    ]
    .into_iter()
    .map(|(name, rule)| (name.to_string(), rule))
    .collect()
}

fn pavilion_curve(source_key: &str) -> FieldRule {
    FieldRule::numeric(0.0, 100.0, 0.2)
        .source(source_key)
        .rounding(0.1)
}

fn library_profile(name: &str, pavilion_curve_key: &str) -> ShapeProfile {
    ShapeProfile::new(name)
        .fields(common_fields())
        .field(FIELD_PAVILION_CURVE, pavilion_curve(pavilion_curve_key))
        .post_process(PostProcess::GradeLetters)
}

/// All library profiles. The pavilion curve is keyed from a different
/// export attribute depending on the cut.
pub fn library_profiles() -> Vec<ShapeProfile> {
    vec![
        library_profile(PEAR_8_MAINS, KEY_PAVILION_CURVE_ANGLE),
        library_profile(PEAR_4_MAINS, KEY_PAVILION_HEAD_ANGLE),
        library_profile(OVAL_8_MAINS, KEY_PAVILION_CURVE_ANGLE),
        library_profile(OVAL_4_MAINS, KEY_PAVILION_WING_ANGLE),
        library_profile(MARQ_8_MAINS, KEY_PAVILION_CURVE_ANGLE),
        library_profile(MARQ_4_MAINS, KEY_PAVILION_WING_ANGLE),
    ]
}
