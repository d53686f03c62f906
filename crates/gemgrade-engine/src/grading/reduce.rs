//! Row-set reduction: the lowest numeric value of a grade column.

use gemgrade_core::traits::{CellValue, LookupRow};

/// Minimum of `column` over `rows`, ignoring missing and non-numeric cells.
/// `None` when no cell is numeric.
pub fn min_grade(rows: &[LookupRow], column: &str) -> Option<f64> {
    rows.iter()
        .filter_map(|row| row.get(column).and_then(CellValue::as_number))
        .reduce(f64::min)
}
