//! GradeLookup: narrow read interface over the grade tables.
//!
//! The grading engine never knows how tables are stored. It issues an
//! exact-match filter or an exact-match-plus-bracketing-range filter and
//! gets rows back.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::LookupError;
use crate::types::measurement::parse_number;

/// A raw cell as stored by the lookup source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl CellValue {
    /// Numeric view of the cell. Text is parsed; anything else that is
    /// not a finite number yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Integer(i) => Some(*i as f64),
            Self::Real(r) => Some(*r).filter(|v| v.is_finite()),
            Self::Text(t) => parse_number(t),
        }
    }

    /// Equality as a SQL engine with numeric affinity would apply it:
    /// numbers compare by value across integer/real, text compares exactly.
    pub fn loosely_equals(&self, other: &CellValue) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Null, _) | (_, Self::Null) => false,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// One result row: column name → raw value.
pub type LookupRow = BTreeMap<String, CellValue>;

/// `column = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualsPredicate {
    pub column: String,
    pub value: CellValue,
}

impl EqualsPredicate {
    pub fn new(column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, row: &LookupRow) -> bool {
        row.get(&self.column)
            .is_some_and(|cell| cell.loosely_equals(&self.value))
    }
}

/// `min_column <= value AND max_column >= value`, inclusive on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct RangePredicate {
    pub min_column: String,
    pub max_column: String,
    pub value: f64,
}

impl RangePredicate {
    pub fn new(min_column: impl Into<String>, max_column: impl Into<String>, value: f64) -> Self {
        Self {
            min_column: min_column.into(),
            max_column: max_column.into(),
            value,
        }
    }

    pub fn brackets(&self, row: &LookupRow) -> bool {
        let min = row.get(&self.min_column).and_then(CellValue::as_number);
        let max = row.get(&self.max_column).and_then(CellValue::as_number);
        matches!((min, max), (Some(lo), Some(hi)) if lo <= self.value && self.value <= hi)
    }
}

/// Read interface of the tabular lookup collaborator.
///
/// Implementations must be shareable across threads: the resolver may
/// issue its queries concurrently. A failure is always an `Err`, never an
/// empty row set.
pub trait GradeLookup: Send + Sync {
    /// Rows of `table` matching every predicate exactly.
    fn query_equals(
        &self,
        table: &str,
        predicates: &[EqualsPredicate],
    ) -> Result<Vec<LookupRow>, LookupError>;

    /// Rows of `table` matching every equality predicate whose stored range
    /// brackets `range.value`.
    fn query_range(
        &self,
        table: &str,
        equals: &[EqualsPredicate],
        range: &RangePredicate,
    ) -> Result<Vec<LookupRow>, LookupError>;
}

impl<T: GradeLookup + ?Sized> GradeLookup for Arc<T> {
    fn query_equals(
        &self,
        table: &str,
        predicates: &[EqualsPredicate],
    ) -> Result<Vec<LookupRow>, LookupError> {
        (**self).query_equals(table, predicates)
    }

    fn query_range(
        &self,
        table: &str,
        equals: &[EqualsPredicate],
        range: &RangePredicate,
    ) -> Result<Vec<LookupRow>, LookupError> {
        (**self).query_range(table, equals, range)
    }
}

impl<T: GradeLookup + ?Sized> GradeLookup for &T {
    fn query_equals(
        &self,
        table: &str,
        predicates: &[EqualsPredicate],
    ) -> Result<Vec<LookupRow>, LookupError> {
        (**self).query_equals(table, predicates)
    }

    fn query_range(
        &self,
        table: &str,
        equals: &[EqualsPredicate],
        range: &RangePredicate,
    ) -> Result<Vec<LookupRow>, LookupError> {
        (**self).query_range(table, equals, range)
    }
}
