//! GradeResolver: KGS, fish-eye and bowtie grades for one stone.
//!
//! The primary table is matched exactly on table width, crown angle and
//! pavilion depth; KGS and fish-eye are the lowest grades among the
//! matches. When a halves-angle average is known, the bowtie table is
//! matched on crown angle and a stored halves range bracketing the
//! average; bowtie is the lowest grade among those matches.
//!
//! A primary lookup failure fails the call. A bowtie lookup failure is
//! logged and recorded, and bowtie stays `None`.

use gemgrade_core::config::GradingConfig;
use gemgrade_core::constants::{
    COL_BOWTIE_GRADE, COL_CROWN_ANGLE, COL_FISH_EYE_GRADE, COL_HALVES_MAX, COL_HALVES_MIN,
    COL_KGS_GRADE, COL_PAVILION_DEPTH, COL_TABLE_WIDTH,
};
use gemgrade_core::errors::{GradeError, GradeResolution, LookupError};
use gemgrade_core::traits::{EqualsPredicate, GradeLookup, LookupRow, RangePredicate};
use gemgrade_core::types::measurement::parse_number;
use gemgrade_core::{GradeQuery, GradeResult};

use super::reduce::min_grade;
use super::tables::{tables_for, GradeTables};

type LookupOutcome = Result<Vec<LookupRow>, LookupError>;

/// Resolves grades through a lookup collaborator.
#[derive(Debug, Clone)]
pub struct GradeResolver<L> {
    lookup: L,
    concurrent: bool,
}

impl<L: GradeLookup> GradeResolver<L> {
    /// A resolver that dispatches its two lookups concurrently.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            concurrent: true,
        }
    }

    pub fn with_config(lookup: L, config: &GradingConfig) -> Self {
        Self {
            lookup,
            concurrent: config.effective_concurrent_queries(),
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolve grades, returning the bowtie failure (if any) alongside.
    pub fn resolve(&self, query: &GradeQuery) -> Result<GradeResolution<GradeResult>, GradeError> {
        let numeric = |v: &Option<String>| v.as_deref().and_then(parse_number);
        let (Some(table_width), Some(crown), Some(pavilion_depth)) = (
            numeric(&query.table_width),
            numeric(&query.crown_angle),
            numeric(&query.pavilion_depth),
        ) else {
            tracing::debug!(shape = %query.shape, "insufficient input for grading");
            return Ok(GradeResolution::new(GradeResult::empty()));
        };

        let Some(tables) = tables_for(&query.shape) else {
            tracing::warn!(shape = %query.shape, "no grade tables for shape");
            return Ok(GradeResolution::new(GradeResult::empty()));
        };

        let halves_avg = numeric(&query.halves_angle_avg);

        let primary = || self.query_primary(tables, table_width, crown, pavilion_depth);
        let bowtie = || halves_avg.map(|avg| self.query_bowtie(tables, crown, avg));

        let (primary_rows, bowtie_rows) = if self.concurrent && halves_avg.is_some() {
            rayon::join(primary, bowtie)
        } else {
            // Sequential: a primary failure skips the bowtie lookup.
            let rows = primary();
            if rows.is_err() {
                (rows, None)
            } else {
                (rows, bowtie())
            }
        };

        let primary_rows = primary_rows.map_err(|source| GradeError::PrimaryLookup {
            table: tables.primary.to_string(),
            source,
        })?;

        let mut resolution = GradeResolution::new(GradeResult {
            primary: min_grade(&primary_rows, COL_KGS_GRADE),
            secondary: None,
            tertiary: min_grade(&primary_rows, COL_FISH_EYE_GRADE),
        });

        match bowtie_rows {
            Some(Ok(rows)) => {
                resolution.grades.secondary = min_grade(&rows, COL_BOWTIE_GRADE);
            }
            Some(Err(e)) => {
                tracing::warn!(table = tables.bowtie, error = %e, "bowtie lookup failed, continuing without it");
                resolution.add_error(e);
            }
            None => {}
        }

        tracing::debug!(
            shape = %query.shape,
            primary_rows = primary_rows.len(),
            grades = ?resolution.grades,
            "resolved grades"
        );

        Ok(resolution)
    }

    /// Resolve grades, dropping any recovered bowtie failure.
    pub fn resolve_grades(&self, query: &GradeQuery) -> Result<GradeResult, GradeError> {
        self.resolve(query).map(|r| r.grades)
    }

    fn query_primary(
        &self,
        tables: GradeTables,
        table_width: f64,
        crown: f64,
        pavilion_depth: f64,
    ) -> LookupOutcome {
        tracing::debug!(table = tables.primary, table_width, crown, pavilion_depth, "primary lookup");
        self.lookup.query_equals(
            tables.primary,
            &[
                EqualsPredicate::new(COL_TABLE_WIDTH, table_width),
                EqualsPredicate::new(COL_CROWN_ANGLE, crown),
                EqualsPredicate::new(COL_PAVILION_DEPTH, pavilion_depth),
            ],
        )
    }

    fn query_bowtie(&self, tables: GradeTables, crown: f64, halves_avg: f64) -> LookupOutcome {
        tracing::debug!(table = tables.bowtie, crown, halves_avg, "bowtie lookup");
        self.lookup.query_range(
            tables.bowtie,
            &[EqualsPredicate::new(COL_CROWN_ANGLE, crown)],
            &RangePredicate::new(COL_HALVES_MIN, COL_HALVES_MAX, halves_avg),
        )
    }
}

/// Resolve KGS, bowtie and fish-eye grades for one stone.
///
/// Missing or non-numeric table width, crown angle or pavilion depth
/// returns all-`None` grades without touching `lookup`.
pub fn resolve_grades<L: GradeLookup>(
    lookup: L,
    table_width: Option<&str>,
    crown_angle: Option<&str>,
    pavilion_depth: Option<&str>,
    shape: &str,
    halves_angle_avg: Option<&str>,
) -> Result<GradeResult, GradeError> {
    let query = GradeQuery::new(shape, table_width, crown_angle, pavilion_depth, halves_angle_avg);
    GradeResolver::new(lookup).resolve_grades(&query)
}
