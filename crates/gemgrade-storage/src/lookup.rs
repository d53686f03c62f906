//! `GradeLookup` over the SQLite grade tables.

use gemgrade_core::errors::LookupError;
use gemgrade_core::traits::{EqualsPredicate, GradeLookup, LookupRow, RangePredicate};

use crate::connection::LookupDatabase;
use crate::queries;

impl GradeLookup for LookupDatabase {
    fn query_equals(
        &self,
        table: &str,
        predicates: &[EqualsPredicate],
    ) -> Result<Vec<LookupRow>, LookupError> {
        self.with_reader(|conn| Ok(queries::lookup::query_equals(conn, table, predicates)))?
    }

    fn query_range(
        &self,
        table: &str,
        predicates: &[EqualsPredicate],
        range: &RangePredicate,
    ) -> Result<Vec<LookupRow>, LookupError> {
        self.with_reader(|conn| Ok(queries::lookup::query_range(conn, table, predicates, range)))?
    }
}
