//! Shape → lookup table selection.

use crate::shapes::variants::{
    MARQ_4_MAINS, MARQ_8_MAINS, OVAL_4_MAINS, OVAL_8_MAINS, PEAR_4_MAINS, PEAR_8_MAINS,
};

/// The two tables graded for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeTables {
    /// KGS and fish-eye grades keyed by table width, crown angle and
    /// pavilion depth.
    pub primary: &'static str,
    /// Bowtie grades keyed by crown angle and a halves-angle range.
    pub bowtie: &'static str,
}

pub const SHAPE_TABLES: [(&str, GradeTables); 6] = [
    (
        PEAR_8_MAINS,
        GradeTables {
            primary: "kgs_pear_8",
            bowtie: "bowtie_pear_8",
        },
    ),
    (
        PEAR_4_MAINS,
        GradeTables {
            primary: "kgs_pear_4",
            bowtie: "bowtie_pear_4",
        },
    ),
    (
        OVAL_8_MAINS,
        GradeTables {
            primary: "kgs_oval_8",
            bowtie: "bowtie_oval_8",
        },
    ),
    (
        OVAL_4_MAINS,
        GradeTables {
            primary: "kgs_oval_4",
            bowtie: "bowtie_oval_4",
        },
    ),
    (
        MARQ_8_MAINS,
        GradeTables {
            primary: "kgs_marq_8",
            bowtie: "bowtie_marq_8",
        },
    ),
    (
        MARQ_4_MAINS,
        GradeTables {
            primary: "kgs_marq_4",
            bowtie: "bowtie_marq_4",
        },
    ),
];

/// Tables for `shape`, or `None` for shapes without grade data.
pub fn tables_for(shape: &str) -> Option<GradeTables> {
    SHAPE_TABLES
        .iter()
        .find(|(name, _)| *name == shape)
        .map(|(_, tables)| *tables)
}
