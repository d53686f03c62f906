//! Field mapper: applies a profile's rules to a measurement export.

use gemgrade_core::{checked_round_to_step, MeasurementMap, NormalizedFieldSet};

use crate::shapes::ShapeProfile;

/// Map `data` through `profile` onto `fields`.
///
/// Every rule with a source key whose raw value is numeric is rounded and
/// written, overwriting what `fields` already holds. Non-numeric values,
/// values too large to round, and rules without a source key leave the
/// field untouched. The profile's post-processing hook then sees
/// everything computed so far and its output is merged over the result.
pub fn map_fields_onto(
    data: &MeasurementMap,
    profile: &ShapeProfile,
    mut fields: NormalizedFieldSet,
) -> NormalizedFieldSet {
    for (name, rule) in &profile.fields {
        let Some(key) = rule.source_key.as_deref() else {
            continue;
        };
        let rounded = data
            .number(key)
            .and_then(|value| checked_round_to_step(value, rule.effective_rounding()));
        if let Some(value) = rounded {
            fields.insert(name.as_str(), value);
        }
    }

    let overrides = profile.post_process.apply(profile, data, &fields);
    fields.merge(overrides);
    fields
}

/// Map `data` through `profile` from an empty field set.
pub fn map_fields(data: &MeasurementMap, profile: &ShapeProfile) -> NormalizedFieldSet {
    map_fields_onto(data, profile, NormalizedFieldSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{FieldRule, PostProcess, ShapeRegistry};

    fn data(pairs: &[(&str, &str)]) -> MeasurementMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn rounds_each_sourced_field() {
        let d = data(&[
            ("WIDTH_TABLE_PC", "60.4"),
            ("CROWN_FANCY_CURVE_ANGLE_DEG", "30.2"),
            ("PAVILION_DEPTH_PC", "45.1"),
            ("STAR_RATIO_PC", "49.5"),
        ]);
        let fields = map_fields(&d, ShapeRegistry::library().fallback());
        assert_eq!(fields.get("tableWidth"), Some("60"));
        assert_eq!(fields.get("crown"), Some("30.0"));
        assert_eq!(fields.get("pavilionDepth"), Some("45.2"));
        assert_eq!(fields.get("starRatio"), Some("50"));
    }

    #[test]
    fn field_without_source_key_is_never_populated() {
        let d = data(&[("halvesAngle", "40"), ("HALVES_ANGLE", "40")]);
        let fields = map_fields(&d, ShapeRegistry::library().fallback());
        assert!(!fields.contains("halvesAngle"));
    }

    #[test]
    fn non_numeric_values_are_skipped() {
        let d = data(&[("WIDTH_TABLE_PC", "wide"), ("PAVILION_DEPTH_PC", "")]);
        let fields = map_fields(&d, ShapeRegistry::library().fallback());
        assert!(!fields.contains("tableWidth"));
        assert!(!fields.contains("pavilionDepth"));
    }

    #[test]
    fn unset_rounding_defaults_to_whole_numbers() {
        let profile = ShapeProfile::new("Plain")
            .field("depth", FieldRule::numeric(0.0, 100.0, 0.1).source("DEPTH"));
        let fields = map_fields(&data(&[("DEPTH", "61.7")]), &profile);
        assert_eq!(fields.get("depth"), Some("62"));
    }

    #[test]
    fn grade_letters_come_from_the_hook() {
        let d = data(&[("AZIMUTH", "VG"), ("SYMMETRY", "EX")]);
        let fields = map_fields(&d, ShapeRegistry::library().fallback());
        assert_eq!(fields.get("azimuth"), Some("VG"));
        assert_eq!(fields.get("symmetry"), Some("EX"));

        let no_hook = ShapeRegistry::library()
            .fallback()
            .clone()
            .post_process(PostProcess::None);
        assert!(map_fields(&d, &no_hook).get("azimuth").is_none());
    }

    #[test]
    fn hook_output_overrides_standard_fields() {
        fn pin_table(_: &MeasurementMap, _: &NormalizedFieldSet) -> NormalizedFieldSet {
            [("tableWidth", "57"), ("note", "pinned")].into_iter().collect()
        }
        let profile = ShapeRegistry::library()
            .fallback()
            .clone()
            .post_process(PostProcess::Custom(pin_table));
        let fields = map_fields(&data(&[("WIDTH_TABLE_PC", "60.4")]), &profile);
        assert_eq!(fields.get("tableWidth"), Some("57"));
        assert_eq!(fields.get("note"), Some("pinned"));
    }

    #[test]
    fn mapped_values_overwrite_seeded_fields() {
        let seeded: NormalizedFieldSet = [("haD", "41.0"), ("cwDiff", "3.3")].into_iter().collect();
        let d = data(&[("HA_D", "40.2")]);
        let fields = map_fields_onto(&d, ShapeRegistry::library().fallback(), seeded);
        assert_eq!(fields.get("haD"), Some("40.0"));
        assert_eq!(fields.get("cwDiff"), Some("3.3"));
    }
}
