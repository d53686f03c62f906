//! Derived fields: halves-angle statistics, crown/wing delta, and HA-D.
//!
//! Each derivation reads a fixed set of raw angles. A derived field is
//! present only when its inputs are; it is never zero-filled.

use gemgrade_core::constants::{
    DEFAULT_HA_D_STEP, DERIVED_ANGLE_STEP, FIELD_CW_DIFF, FIELD_HALVES_ANGLE_AVG,
    FIELD_HALVES_ANGLE_MAX, FIELD_HALVES_ANGLE_MIN, FIELD_HA_D, HALVES_ANGLE_PREFIX,
    KEY_CROWN_CURVE_ANGLE, KEY_CROWN_WING_ANGLE, PAVILION_ANGLE_PREFIX,
};
use gemgrade_core::{checked_round_to_step, MeasurementMap, NormalizedFieldSet, Step};

use crate::shapes::ShapeProfile;

/// Halves facets sampled by default.
pub const HALVES_INDICES: [u8; 4] = [1, 8, 9, 16];

/// Halves facets sampled when halves angle 1 does not exceed pavilion
/// angle 1.
pub const HALVES_ALTERNATE_INDICES: [u8; 4] = [2, 7, 10, 15];

/// Halves facets averaged into HA-D.
pub const HA_D_INDICES: [u8; 2] = [12, 13];

/// Average, minimum and maximum of the sampled halves angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalvesStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

fn halves_key(index: u8) -> String {
    format!("{HALVES_ANGLE_PREFIX}{index}")
}

fn pavilion_key(index: u8) -> String {
    format!("{PAVILION_ANGLE_PREFIX}{index}")
}

/// Pick the halves facets to sample. The alternate set applies only when
/// both comparison angles are numeric and halves 1 ≤ pavilion 1.
pub fn halves_index_set(data: &MeasurementMap) -> &'static [u8; 4] {
    match (data.number(&halves_key(1)), data.number(&pavilion_key(1))) {
        (Some(halves), Some(pavilion)) if halves <= pavilion => &HALVES_ALTERNATE_INDICES,
        _ => &HALVES_INDICES,
    }
}

/// Statistics over the numeric halves angles; `None` when none are numeric.
pub fn halves_stats(data: &MeasurementMap) -> Option<HalvesStats> {
    let values: Vec<f64> = halves_index_set(data)
        .iter()
        .filter_map(|&i| data.number(&halves_key(i)))
        .collect();
    if values.is_empty() {
        return None;
    }
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(HalvesStats { avg, min, max })
}

/// |crown curve angle − crown wing angle|, when both are numeric.
pub fn crown_wing_delta(data: &MeasurementMap) -> Option<f64> {
    let curve = data.number(KEY_CROWN_CURVE_ANGLE)?;
    let wing = data.number(KEY_CROWN_WING_ANGLE)?;
    Some((curve - wing).abs())
}

/// Mean of the two HA-D halves angles, when both are numeric.
pub fn ha_d(data: &MeasurementMap) -> Option<f64> {
    let [a, b] = HA_D_INDICES.map(|i| data.number(&halves_key(i)));
    Some((a? + b?) / 2.0)
}

/// Compute every derived field for `data`.
///
/// HA-D uses the profile's `haD` rounding when it has one. A value that
/// cannot be rounded leaves its field absent.
pub fn derive_fields(data: &MeasurementMap, profile: &ShapeProfile) -> NormalizedFieldSet {
    let angle_step = Step::from(DERIVED_ANGLE_STEP);
    let mut fields = NormalizedFieldSet::new();

    if let Some(stats) = halves_stats(data) {
        insert_rounded(&mut fields, FIELD_HALVES_ANGLE_AVG, stats.avg, angle_step);
        insert_rounded(&mut fields, FIELD_HALVES_ANGLE_MIN, stats.min, angle_step);
        insert_rounded(&mut fields, FIELD_HALVES_ANGLE_MAX, stats.max, angle_step);
    }

    if let Some(delta) = crown_wing_delta(data) {
        insert_rounded(&mut fields, FIELD_CW_DIFF, delta, angle_step);
    }

    if let Some(value) = ha_d(data) {
        let step = profile
            .rule(FIELD_HA_D)
            .and_then(|rule| rule.rounding)
            .unwrap_or_else(|| Step::from(DEFAULT_HA_D_STEP));
        insert_rounded(&mut fields, FIELD_HA_D, value, step);
    }

    fields
}

fn insert_rounded(fields: &mut NormalizedFieldSet, name: &str, value: f64, step: Step) {
    if let Some(rounded) = checked_round_to_step(value, step) {
        fields.insert(name, rounded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeRegistry;

    fn data(pairs: &[(&str, &str)]) -> MeasurementMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn halves_stats_over_default_facets() {
        let d = data(&[
            ("HALVES_ANGLE_DEG_1", "40"),
            ("HALVES_ANGLE_DEG_8", "41"),
            ("HALVES_ANGLE_DEG_9", "42"),
            ("HALVES_ANGLE_DEG_16", "43"),
        ]);
        let fields = derive_fields(&d, ShapeRegistry::library().fallback());
        assert_eq!(fields.get("halvesAngleAvg"), Some("41.5"));
        assert_eq!(fields.get("halvesAngleMin"), Some("40.0"));
        assert_eq!(fields.get("halvesAngleMax"), Some("43.0"));
    }

    #[test]
    fn alternate_facets_when_halves_not_above_pavilion() {
        let d = data(&[
            ("HALVES_ANGLE_DEG_1", "40"),
            ("PAVILION_ANGLE_DEG_1", "40"),
            ("HALVES_ANGLE_DEG_2", "38"),
            ("HALVES_ANGLE_DEG_7", "39"),
            ("HALVES_ANGLE_DEG_10", "40"),
            ("HALVES_ANGLE_DEG_15", "41"),
        ]);
        assert_eq!(halves_index_set(&d), &HALVES_ALTERNATE_INDICES);
        let stats = halves_stats(&d).unwrap();
        assert_eq!(stats.avg, 39.5);
        assert_eq!(stats.min, 38.0);
        assert_eq!(stats.max, 41.0);
    }

    #[test]
    fn default_facets_when_halves_above_pavilion() {
        let d = data(&[("HALVES_ANGLE_DEG_1", "41"), ("PAVILION_ANGLE_DEG_1", "40.9")]);
        assert_eq!(halves_index_set(&d), &HALVES_INDICES);
    }

    #[test]
    fn non_numeric_halves_are_skipped_and_absent_when_none() {
        let d = data(&[("HALVES_ANGLE_DEG_1", "n/a"), ("HALVES_ANGLE_DEG_8", "42")]);
        let stats = halves_stats(&d).unwrap();
        assert_eq!(stats.avg, 42.0);

        let none = derive_fields(&data(&[("HALVES_ANGLE_DEG_1", "x")]), ShapeRegistry::library().fallback());
        assert!(!none.contains("halvesAngleAvg"));
        assert!(!none.contains("halvesAngleMin"));
    }

    #[test]
    fn crown_wing_delta_needs_both_angles() {
        let d = data(&[
            ("CROWN_FANCY_CURVE_ANGLE_DEG", "30.2"),
            ("CROWN_FANCY_WING_ANGLE_DEG", "33.45"),
        ]);
        let fields = derive_fields(&d, ShapeRegistry::library().fallback());
        assert_eq!(fields.get("cwDiff"), Some("3.3"));

        let only_curve = data(&[("CROWN_FANCY_CURVE_ANGLE_DEG", "30.2")]);
        assert!(crown_wing_delta(&only_curve).is_none());
    }

    #[test]
    fn ha_d_uses_profile_rounding_or_default() {
        let d = data(&[("HALVES_ANGLE_DEG_12", "40.6"), ("HALVES_ANGLE_DEG_13", "41.0")]);
        let fields = derive_fields(&d, ShapeRegistry::library().fallback());
        assert_eq!(fields.get("haD"), Some("41.0"));

        let bare = ShapeProfile::new("Bare");
        let fields = derive_fields(&d, &bare);
        assert_eq!(fields.get("haD"), Some("41.0"));

        let one = data(&[("HALVES_ANGLE_DEG_12", "40.6")]);
        assert!(ha_d(&one).is_none());
    }
}
