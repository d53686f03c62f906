//! Seeding and counting rows in the kgs_* and bowtie_* tables.

use gemgrade_core::errors::StorageError;
use rusqlite::{params, Connection};

use super::util::is_valid_identifier;

/// One row of a `kgs_<shape>` table.
#[derive(Debug, Clone, PartialEq)]
pub struct KgsRow {
    pub table_width: f64,
    pub crown_angle: f64,
    pub pavilion_depth: f64,
    pub kgs_grade: Option<f64>,
    pub fish_eye_grade: Option<f64>,
}

/// One row of a `bowtie_<shape>` table.
#[derive(Debug, Clone, PartialEq)]
pub struct BowtieRow {
    pub crown_angle: f64,
    pub halves_min: f64,
    pub halves_max: f64,
    pub bowtie_grade: Option<f64>,
}

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

fn checked_table(table: &str) -> Result<&str, StorageError> {
    if is_valid_identifier(table) {
        Ok(table)
    } else {
        Err(StorageError::SqliteError {
            message: format!("invalid table identifier: {table:?}"),
        })
    }
}

/// Insert a batch of KGS rows in one transaction. Returns rows written.
pub fn insert_kgs_rows(
    conn: &Connection,
    table: &str,
    rows: &[KgsRow],
) -> Result<usize, StorageError> {
    let table = checked_table(table)?;
    let tx = conn.unchecked_transaction().map_err(sqlite_err)?;
    {
        let mut stmt = tx
            .prepare_cached(&format!(
                "INSERT INTO {table} (table_width, crown_angle, pavilion_depth, kgs_grade, fish_eye_grade)
                 VALUES (?1, ?2, ?3, ?4, ?5)"
            ))
            .map_err(sqlite_err)?;
        for row in rows {
            stmt.execute(params![
                row.table_width,
                row.crown_angle,
                row.pavilion_depth,
                row.kgs_grade,
                row.fish_eye_grade,
            ])
            .map_err(sqlite_err)?;
        }
    }
    tx.commit().map_err(sqlite_err)?;
    tracing::debug!(table, rows = rows.len(), "seeded kgs rows");
    Ok(rows.len())
}

/// Insert a batch of bowtie rows in one transaction. Returns rows written.
pub fn insert_bowtie_rows(
    conn: &Connection,
    table: &str,
    rows: &[BowtieRow],
) -> Result<usize, StorageError> {
    let table = checked_table(table)?;
    let tx = conn.unchecked_transaction().map_err(sqlite_err)?;
    {
        let mut stmt = tx
            .prepare_cached(&format!(
                "INSERT INTO {table} (crown_angle, halves_min, halves_max, bowtie_grade)
                 VALUES (?1, ?2, ?3, ?4)"
            ))
            .map_err(sqlite_err)?;
        for row in rows {
            stmt.execute(params![
                row.crown_angle,
                row.halves_min,
                row.halves_max,
                row.bowtie_grade,
            ])
            .map_err(sqlite_err)?;
        }
    }
    tx.commit().map_err(sqlite_err)?;
    tracing::debug!(table, rows = rows.len(), "seeded bowtie rows");
    Ok(rows.len())
}

pub fn count_rows(conn: &Connection, table: &str) -> Result<i64, StorageError> {
    let table = checked_table(table)?;
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .map_err(sqlite_err)
}

/// Delete every row of a table, e.g. before reseeding.
pub fn clear_table(conn: &Connection, table: &str) -> Result<usize, StorageError> {
    let table = checked_table(table)?;
    conn.execute(&format!("DELETE FROM {table}"), [])
        .map_err(sqlite_err)
}
