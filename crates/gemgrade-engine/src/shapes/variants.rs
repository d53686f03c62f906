//! Variant detectors: choose a concrete profile within a shape family.
//!
//! Each family splits on whether the export carries a pavilion fancy curve
//! angle. Stones cut with eight pavilion mains report one; four-main cuts
//! do not.

use gemgrade_core::constants::KEY_PAVILION_CURVE_ANGLE;
use gemgrade_core::MeasurementMap;

/// Maps a measurement export to a concrete profile name.
pub type VariantDetector = fn(&MeasurementMap) -> &'static str;

pub const FAMILY_PEAR: &str = "Pear";
pub const FAMILY_OVAL: &str = "Oval";
pub const FAMILY_MARQUISE: &str = "Marquise";

pub const PEAR_8_MAINS: &str = "Pear 8 Mains";
pub const PEAR_4_MAINS: &str = "Pear 4 Mains";
pub const OVAL_8_MAINS: &str = "Oval 8 Mains";
pub const OVAL_4_MAINS: &str = "Oval 4 Mains";
pub const MARQ_8_MAINS: &str = "Marq 8 Mains";
pub const MARQ_4_MAINS: &str = "Marq 4 Mains";

fn has_eight_mains(data: &MeasurementMap) -> bool {
    data.contains_key(KEY_PAVILION_CURVE_ANGLE)
}

pub fn detect_pear(data: &MeasurementMap) -> &'static str {
    if has_eight_mains(data) {
        PEAR_8_MAINS
    } else {
        PEAR_4_MAINS
    }
}

pub fn detect_oval(data: &MeasurementMap) -> &'static str {
    if has_eight_mains(data) {
        OVAL_8_MAINS
    } else {
        OVAL_4_MAINS
    }
}

pub fn detect_marquise(data: &MeasurementMap) -> &'static str {
    if has_eight_mains(data) {
        MARQ_8_MAINS
    } else {
        MARQ_4_MAINS
    }
}

/// Registered detectors, keyed by the family name as it appears in `SHAPE`.
pub fn library_detectors() -> [(&'static str, VariantDetector); 3] {
    [
        (FAMILY_PEAR, detect_pear),
        (FAMILY_OVAL, detect_oval),
        (FAMILY_MARQUISE, detect_marquise),
    ]
}
