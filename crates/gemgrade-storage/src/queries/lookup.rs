//! Filtered reads over a single grade table.

use gemgrade_core::errors::LookupError;
use gemgrade_core::traits::{EqualsPredicate, LookupRow, RangePredicate};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use super::util::{cell_to_sql, is_valid_identifier, row_to_lookup_row, table_exists};

/// Rows of `table` where every predicate column equals its value.
pub fn query_equals(
    conn: &Connection,
    table: &str,
    predicates: &[EqualsPredicate],
) -> Result<Vec<LookupRow>, LookupError> {
    let (mut clauses, values) = equality_clauses(table, predicates)?;
    if clauses.is_empty() {
        clauses.push("1 = 1".to_string());
    }
    run_select(conn, table, &clauses, values)
}

/// Rows of `table` matching every equality predicate whose stored range
/// `[min_column, max_column]` contains the range value.
pub fn query_range(
    conn: &Connection,
    table: &str,
    predicates: &[EqualsPredicate],
    range: &RangePredicate,
) -> Result<Vec<LookupRow>, LookupError> {
    let (mut clauses, mut values) = equality_clauses(table, predicates)?;
    for column in [&range.min_column, &range.max_column] {
        check_identifier(column)?;
    }
    let idx = values.len() + 1;
    clauses.push(format!("{} <= ?{idx}", range.min_column));
    clauses.push(format!("{} >= ?{idx}", range.max_column));
    values.push(Value::Real(range.value));
    run_select(conn, table, &clauses, values)
}

fn check_identifier(name: &str) -> Result<(), LookupError> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(LookupError::InvalidIdentifier(name.to_string()))
    }
}

fn equality_clauses(
    table: &str,
    predicates: &[EqualsPredicate],
) -> Result<(Vec<String>, Vec<Value>), LookupError> {
    check_identifier(table)?;
    let mut clauses = Vec::with_capacity(predicates.len() + 2);
    let mut values = Vec::with_capacity(predicates.len() + 1);
    for (i, predicate) in predicates.iter().enumerate() {
        check_identifier(&predicate.column)?;
        clauses.push(format!("{} = ?{}", predicate.column, i + 1));
        values.push(cell_to_sql(&predicate.value));
    }
    Ok((clauses, values))
}

fn run_select(
    conn: &Connection,
    table: &str,
    clauses: &[String],
    values: Vec<Value>,
) -> Result<Vec<LookupRow>, LookupError> {
    let unavailable = |e: rusqlite::Error| LookupError::Unavailable {
        table: table.to_string(),
        message: e.to_string(),
    };

    if !table_exists(conn, table).map_err(unavailable)? {
        return Err(LookupError::UnknownTable(table.to_string()));
    }

    let sql = format!("SELECT * FROM {table} WHERE {}", clauses.join(" AND "));
    let mut stmt = conn.prepare_cached(&sql).map_err(unavailable)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let rows = stmt
        .query_map(params_from_iter(values), |row| row_to_lookup_row(row, &columns))
        .map_err(unavailable)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(unavailable)?);
    }
    tracing::trace!(table, rows = result.len(), "lookup query");
    Ok(result)
}
