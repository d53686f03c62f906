//! End-to-end: raw export text → normalized field set.

use gemgrade_core::config::MappingConfig;
use gemgrade_engine::pipeline::configured_registry;
use gemgrade_engine::shapes::variants::{OVAL_4_MAINS, PEAR_4_MAINS, PEAR_8_MAINS};
use gemgrade_engine::{compute_normalized_fields, FieldPipeline};

const PEAR_EXPORT: &str = "SHAPE=Pear
PAVILION_FANCY_CURVE_ANGLE_DEG=12
WIDTH_TABLE_PC=60.4
CROWN_FANCY_CURVE_ANGLE_DEG=30.2
PAVILION_DEPTH_PC=45.1
";

#[test]
fn pear_with_curve_angle_maps_to_eight_mains() {
    let fields = compute_normalized_fields(PEAR_EXPORT, None);

    assert_eq!(fields.get("shape"), Some(PEAR_8_MAINS));
    assert_eq!(fields.get("tableWidth"), Some("60"));
    assert_eq!(fields.get("crown"), Some("30.0"));
    assert_eq!(fields.get("pavilionDepth"), Some("45.2"));
    assert_eq!(fields.get("pavilionCurve"), Some("12.0"));
}

#[test]
fn pear_without_curve_angle_maps_to_four_mains() {
    let text = "SHAPE=Pear
PAVILION_FANCY_HEAD_ANGLE_DEG=41.26
WIDTH_TABLE_PC=58
";
    let fields = compute_normalized_fields(text, None);

    assert_eq!(fields.get("shape"), Some(PEAR_4_MAINS));
    assert_eq!(fields.get("tableWidth"), Some("58"));
    assert_eq!(fields.get("pavilionCurve"), Some("41.3"));
}

#[test]
fn explicit_shape_replaces_export_shape() {
    let text = "SHAPE=Pear
WIDTH_TABLE_PC=55.6
";
    let fields = compute_normalized_fields(text, Some("Oval"));
    assert_eq!(fields.get("shape"), Some(OVAL_4_MAINS));
    assert_eq!(fields.get("tableWidth"), Some("56"));

    let fields = compute_normalized_fields(text, Some("Oval 4 Mains"));
    assert_eq!(fields.get("shape"), Some(OVAL_4_MAINS));
}

#[test]
fn blank_explicit_shape_defers_to_export_shape() {
    let text = "SHAPE=Oval
WIDTH_TABLE_PC=60
";
    for blank in ["", "  ", "\t"] {
        let fields = compute_normalized_fields(text, Some(blank));
        assert_eq!(fields.get("shape"), Some(OVAL_4_MAINS), "override {blank:?}");
        assert_eq!(fields.get("tableWidth"), Some("60"));
    }
}

#[test]
fn unknown_shape_uses_fallback_rules_but_keeps_its_name() {
    let text = "SHAPE=Heart
WIDTH_TABLE_PC=60.4
CROWN_FANCY_CURVE_ANGLE_DEG=30.2
";
    let fields = compute_normalized_fields(text, None);

    assert_eq!(fields.get("shape"), Some("Heart"));
    assert_eq!(fields.get("tableWidth"), Some("60"));
    assert_eq!(fields.get("crown"), Some("30.0"));
}

#[test]
fn missing_shape_yields_no_shape_field() {
    let fields = compute_normalized_fields("WIDTH_TABLE_PC=60.4\n", None);
    assert_eq!(fields.get("shape"), None);
    assert_eq!(fields.get("tableWidth"), Some("60"));
}

#[test]
fn halves_statistics_are_derived() {
    let text = "SHAPE=Pear
PAVILION_FANCY_CURVE_ANGLE_DEG=12
HALVES_ANGLE_DEG_1=40
HALVES_ANGLE_DEG_8=41
HALVES_ANGLE_DEG_9=42
HALVES_ANGLE_DEG_16=43
";
    let fields = compute_normalized_fields(text, None);

    assert_eq!(fields.get("halvesAngleAvg"), Some("41.5"));
    assert_eq!(fields.get("halvesAngleMin"), Some("40.0"));
    assert_eq!(fields.get("halvesAngleMax"), Some("43.0"));
}

#[test]
fn crown_wing_delta_and_ha_d_are_derived() {
    let text = "SHAPE=Oval
CROWN_FANCY_CURVE_ANGLE_DEG=33.4
CROWN_FANCY_WING_ANGLE_DEG=35.0
HALVES_ANGLE_DEG_12=40.6
HALVES_ANGLE_DEG_13=41.0
";
    let fields = compute_normalized_fields(text, None);

    assert_eq!(fields.get("cwDiff"), Some("1.6"));
    assert_eq!(fields.get("haD"), Some("41.0"));
}

#[test]
fn measured_field_overrides_derived_field() {
    let text = "SHAPE=Oval
HALVES_ANGLE_DEG_12=40.6
HALVES_ANGLE_DEG_13=41.0
HA_D=41.6
";
    let fields = compute_normalized_fields(text, None);
    assert_eq!(fields.get("haD"), Some("41.5"));
}

#[test]
fn non_numeric_values_are_skipped_not_zeroed() {
    let text = "SHAPE=Marquise
WIDTH_TABLE_PC=n/a
PAVILION_DEPTH_PC=
CROWN_FANCY_CURVE_ANGLE_DEG=31.9
";
    let fields = compute_normalized_fields(text, None);

    assert_eq!(fields.get("tableWidth"), None);
    assert_eq!(fields.get("pavilionDepth"), None);
    assert_eq!(fields.get("crown"), Some("32.0"));
}

#[test]
fn values_that_overflow_rounding_are_left_absent() {
    let text = "SHAPE=Pear
PAVILION_FANCY_CURVE_ANGLE_DEG=12
PAVILION_DEPTH_PC=1e308
CROWN_FANCY_CURVE_ANGLE_DEG=1e308
CROWN_FANCY_WING_ANGLE_DEG=-1e308
WIDTH_TABLE_PC=60.4
";
    let fields = compute_normalized_fields(text, None);

    assert_eq!(fields.get("pavilionDepth"), None);
    assert_eq!(fields.get("crown"), None);
    assert_eq!(fields.get("cwDiff"), None);
    assert_eq!(fields.get("tableWidth"), Some("60"));
    assert!(fields.iter().all(|(_, v)| v != "inf"));
}

#[test]
fn grade_letters_are_copied_verbatim() {
    let text = "SHAPE=Pear
AZIMUTH=VG
SYMMETRY=EX
";
    let fields = compute_normalized_fields(text, None);
    assert_eq!(fields.get("azimuth"), Some("VG"));
    assert_eq!(fields.get("symmetry"), Some("EX"));
}

#[test]
fn configured_fallback_changes_rules_for_unknown_shapes() {
    let registry = configured_registry(&MappingConfig {
        fallback_shape: Some("Oval 4 Mains".to_string()),
    });
    let pipeline = FieldPipeline::new(&registry);
    let text = "SHAPE=Cushion
PAVILION_FANCY_WING_ANGLE_DEG=40.04
PAVILION_FANCY_CURVE_ANGLE_DEG=12
";
    let fields = pipeline.compute(text, None);

    assert_eq!(fields.get("shape"), Some("Cushion"));
    // Oval 4 Mains sources its pavilion curve from the wing angle.
    assert_eq!(fields.get("pavilionCurve"), Some("40.0"));
}

#[test]
fn output_serializes_as_flat_json_object() {
    let fields = compute_normalized_fields(PEAR_EXPORT, None);
    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(json["shape"], "Pear 8 Mains");
    assert_eq!(json["tableWidth"], "60");
    assert!(json.get("halvesAngleAvg").is_none());
}

#[test]
fn empty_input_yields_empty_fields() {
    assert!(compute_normalized_fields("", None).is_empty());
}
