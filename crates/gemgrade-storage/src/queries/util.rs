//! Shared helpers: identifier checks, cell conversion, table existence.

use gemgrade_core::traits::{CellValue, LookupRow};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params, Connection, Row};

/// Table and column names are interpolated into SQL, so they are limited
/// to `[a-z0-9_]+`. Values are always bound.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

/// Whether a table with this name exists.
pub fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    let mut stmt =
        conn.prepare_cached("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    stmt.exists(params![table])
}

pub fn cell_from_sql(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => CellValue::Null,
        ValueRef::Integer(i) => CellValue::Integer(i),
        ValueRef::Real(r) => CellValue::Real(r),
        ValueRef::Text(t) => CellValue::Text(String::from_utf8_lossy(t).into_owned()),
    }
}

pub fn cell_to_sql(cell: &CellValue) -> Value {
    match cell {
        CellValue::Null => Value::Null,
        CellValue::Integer(i) => Value::Integer(*i),
        CellValue::Real(r) => Value::Real(*r),
        CellValue::Text(t) => Value::Text(t.clone()),
    }
}

/// Collect every column of a row, keyed by column name.
pub fn row_to_lookup_row(row: &Row<'_>, columns: &[String]) -> rusqlite::Result<LookupRow> {
    let mut out = LookupRow::new();
    for (idx, name) in columns.iter().enumerate() {
        out.insert(name.clone(), cell_from_sql(row.get_ref(idx)?));
    }
    Ok(out)
}
