//! Shared constants: measurement export keys, normalized field names,
//! lookup table columns, and default steps.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Measurement export keys ----

pub const KEY_SHAPE: &str = "SHAPE";
pub const KEY_AZIMUTH: &str = "AZIMUTH";
pub const KEY_SYMMETRY: &str = "SYMMETRY";
pub const KEY_WIDTH_TABLE: &str = "WIDTH_TABLE_PC";
pub const KEY_CROWN_CURVE_ANGLE: &str = "CROWN_FANCY_CURVE_ANGLE_DEG";
pub const KEY_CROWN_WING_ANGLE: &str = "CROWN_FANCY_WING_ANGLE_DEG";
pub const KEY_CROWN_CURVE_HEIGHT: &str = "CROWN_FANCY_CURVE_HEIGHT_PC";
pub const KEY_PAVILION_DEPTH: &str = "PAVILION_DEPTH_PC";
pub const KEY_PAVILION_CURVE_ANGLE: &str = "PAVILION_FANCY_CURVE_ANGLE_DEG";
pub const KEY_PAVILION_HEAD_ANGLE: &str = "PAVILION_FANCY_HEAD_ANGLE_DEG";
pub const KEY_PAVILION_WING_ANGLE: &str = "PAVILION_FANCY_WING_ANGLE_DEG";
pub const KEY_GIRDLE_FACET_LENGTH: &str = "LENGTH_GIRDLE_FACET";
pub const KEY_STAR_RATIO: &str = "STAR_RATIO_PC";
pub const KEY_HA_D: &str = "HA_D";

/// Prefix of the per-facet halves angle keys (`HALVES_ANGLE_DEG_1` ..).
pub const HALVES_ANGLE_PREFIX: &str = "HALVES_ANGLE_DEG_";

/// Prefix of the per-facet pavilion angle keys (`PAVILION_ANGLE_DEG_1` ..).
pub const PAVILION_ANGLE_PREFIX: &str = "PAVILION_ANGLE_DEG_";

// ---- Normalized field names ----

pub const FIELD_SHAPE: &str = "shape";
pub const FIELD_TABLE_WIDTH: &str = "tableWidth";
pub const FIELD_CROWN: &str = "crown";
pub const FIELD_PAVILION_DEPTH: &str = "pavilionDepth";
pub const FIELD_PAVILION_CURVE: &str = "pavilionCurve";
pub const FIELD_HALVES_ANGLE: &str = "halvesAngle";
pub const FIELD_HALVES_ANGLE_AVG: &str = "halvesAngleAvg";
pub const FIELD_HALVES_ANGLE_MIN: &str = "halvesAngleMin";
pub const FIELD_HALVES_ANGLE_MAX: &str = "halvesAngleMax";
pub const FIELD_CW_DIFF: &str = "cwDiff";
pub const FIELD_HA_D: &str = "haD";
pub const FIELD_LOWER_LHL: &str = "lowerLHL";
pub const FIELD_STAR_RATIO: &str = "starRatio";
pub const FIELD_CROWN_HEIGHT: &str = "crownHeight";
pub const FIELD_AZIMUTH: &str = "azimuth";
pub const FIELD_SYMMETRY: &str = "symmetry";

/// Grade letters accepted for azimuth and symmetry, best first.
pub const GRADE_LETTERS: [&str; 4] = ["EX", "VG", "G", "F"];

// ---- Lookup table columns ----

pub const COL_TABLE_WIDTH: &str = "table_width";
pub const COL_CROWN_ANGLE: &str = "crown_angle";
pub const COL_PAVILION_DEPTH: &str = "pavilion_depth";
pub const COL_KGS_GRADE: &str = "kgs_grade";
pub const COL_FISH_EYE_GRADE: &str = "fish_eye_grade";
pub const COL_HALVES_MIN: &str = "halves_min";
pub const COL_HALVES_MAX: &str = "halves_max";
pub const COL_BOWTIE_GRADE: &str = "bowtie_grade";

// ---- Defaults ----

/// Profile used when the resolved shape name is not in the library.
pub const DEFAULT_SHAPE: &str = "Pear 8 Mains";

/// Rounding step used by the halves statistics and the crown/wing delta.
pub const DERIVED_ANGLE_STEP: f64 = 0.1;

/// HA-D rounding when the active profile has no `haD` rule.
pub const DEFAULT_HA_D_STEP: f64 = 0.5;

/// Rounding applied by the field mapper when a rule has none.
pub const DEFAULT_FIELD_ROUNDING: f64 = 1.0;

/// Default number of read connections against the lookup database.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Upper bound on read connections.
pub const MAX_READ_POOL_SIZE: usize = 8;
