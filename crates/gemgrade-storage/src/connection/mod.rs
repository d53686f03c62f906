//! The grade table database: one seeding connection plus lookup readers.

pub mod pragmas;
pub mod readers;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gemgrade_core::config::GemgradeConfig;
use gemgrade_core::errors::StorageError;
use rusqlite::Connection;

use self::pragmas::apply_pragmas;
use self::readers::LookupReaders;
use crate::migrations;

/// Grade tables behind a migrated SQLite database.
///
/// Seeding and other writes go through a single connection. Lookups use
/// read-only readers when the database is on disk; an in-memory database
/// is private to its connection, so there lookups share the writer.
pub struct LookupDatabase {
    writer: Mutex<Connection>,
    readers: Option<LookupReaders>,
    path: Option<PathBuf>,
}

impl LookupDatabase {
    /// Open (or create) the database at `path` with room for
    /// `reader_capacity` concurrent lookups.
    pub fn open(path: &Path, reader_capacity: usize) -> Result<Self, StorageError> {
        let writer = migrated(Connection::open(path))?;
        tracing::info!(path = %path.display(), reader_capacity, "opened grade table database");
        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(LookupReaders::new(path, reader_capacity)),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = migrated(Connection::open_in_memory())?;
        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            path: None,
        })
    }

    /// Open per config. On disk when `storage.database_path` is set. With
    /// concurrent grading the reader capacity is `storage.read_pool_size`;
    /// sequential grading never runs two lookups at once, so one reader
    /// suffices.
    pub fn open_with_config(config: &GemgradeConfig) -> Result<Self, StorageError> {
        let Some(path) = config.storage.database_path.as_deref() else {
            return Self::open_in_memory();
        };
        let capacity = if config.grading.effective_concurrent_queries() {
            config.storage.effective_read_pool_size()
        } else {
            1
        };
        Self::open(Path::new(path), capacity)
    }

    /// Run `f` on the seeding connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.writer.lock().map_err(|_| StorageError::SqliteError {
            message: "seeding connection lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Run `f` on a lookup reader.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(readers) => readers.with_reader(f),
            None => self.with_writer(f),
        }
    }

    /// Fold the WAL back into the database file, e.g. after seeding.
    pub fn checkpoint(&self) -> Result<(), StorageError> {
        self.with_writer(|conn| {
            conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
                .map_err(|e| StorageError::SqliteError {
                    message: e.to_string(),
                })
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Maximum concurrent lookup readers (0 for in-memory).
    pub fn reader_capacity(&self) -> usize {
        self.readers.as_ref().map_or(0, LookupReaders::capacity)
    }

    /// Lookup readers opened so far (0 for in-memory).
    pub fn open_readers(&self) -> usize {
        self.readers.as_ref().map_or(0, LookupReaders::opened)
    }
}

fn migrated(conn: rusqlite::Result<Connection>) -> Result<Connection, StorageError> {
    let conn = conn.map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    apply_pragmas(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
