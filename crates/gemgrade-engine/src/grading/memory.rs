//! InMemoryLookup: a `GradeLookup` over rows held in memory.

use std::collections::HashMap;

use gemgrade_core::errors::LookupError;
use gemgrade_core::traits::{EqualsPredicate, GradeLookup, LookupRow, RangePredicate};

/// Tables of rows held in memory. Unknown tables are an error, an empty
/// table is not.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    tables: HashMap<String, Vec<LookupRow>>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `table` with no rows.
    pub fn create_table(&mut self, table: &str) {
        self.tables.entry(table.to_string()).or_default();
    }

    /// Append a row, creating the table if needed.
    pub fn insert_row(&mut self, table: &str, row: LookupRow) {
        self.tables.entry(table.to_string()).or_default().push(row);
    }

    fn rows(&self, table: &str) -> Result<&[LookupRow], LookupError> {
        self.tables
            .get(table)
            .map(Vec::as_slice)
            .ok_or_else(|| LookupError::UnknownTable(table.to_string()))
    }
}

impl GradeLookup for InMemoryLookup {
    fn query_equals(
        &self,
        table: &str,
        predicates: &[EqualsPredicate],
    ) -> Result<Vec<LookupRow>, LookupError> {
        Ok(self
            .rows(table)?
            .iter()
            .filter(|row| predicates.iter().all(|p| p.matches(row)))
            .cloned()
            .collect())
    }

    fn query_range(
        &self,
        table: &str,
        equals: &[EqualsPredicate],
        range: &RangePredicate,
    ) -> Result<Vec<LookupRow>, LookupError> {
        Ok(self
            .rows(table)?
            .iter()
            .filter(|row| equals.iter().all(|p| p.matches(row)) && range.brackets(row))
            .cloned()
            .collect())
    }
}
