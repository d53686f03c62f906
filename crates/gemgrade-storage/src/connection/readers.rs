//! Read-only lookup connections, opened on first use.
//!
//! A grade resolution runs at most two lookups at once, so most callers
//! never open more than one or two readers. A lookup takes the first idle
//! reader; when every reader is busy it waits on one in rotation.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, TryLockError};

use gemgrade_core::constants::MAX_READ_POOL_SIZE;
use gemgrade_core::errors::StorageError;
use rusqlite::{Connection, OpenFlags};

use super::pragmas::apply_read_pragmas;

type ReaderSlot = Mutex<Option<Connection>>;

pub struct LookupReaders {
    path: PathBuf,
    slots: Vec<ReaderSlot>,
    opened: AtomicUsize,
    rotation: AtomicUsize,
}

impl LookupReaders {
    /// Up to `capacity` readers (clamped to 1..=8) on the database at `path`.
    /// Nothing is opened yet.
    pub fn new(path: &Path, capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_READ_POOL_SIZE);
        Self {
            path: path.to_path_buf(),
            slots: (0..capacity).map(|_| Mutex::new(None)).collect(),
            opened: AtomicUsize::new(0),
            rotation: AtomicUsize::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Readers opened so far.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::Relaxed)
    }

    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let mut slot = self.acquire()?;
        let conn = match &mut *slot {
            Some(conn) => conn,
            empty => {
                let conn = open_reader(&self.path)?;
                let opened = self.opened.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::debug!(opened, capacity = self.capacity(), "opened lookup reader");
                empty.insert(conn)
            }
        };
        f(conn)
    }

    fn acquire(&self) -> Result<MutexGuard<'_, Option<Connection>>, StorageError> {
        for slot in &self.slots {
            match slot.try_lock() {
                Ok(guard) => return Ok(guard),
                Err(TryLockError::WouldBlock) => continue,
                Err(TryLockError::Poisoned(_)) => return Err(poisoned()),
            }
        }
        let idx = self.rotation.fetch_add(1, Ordering::Relaxed) % self.slots.len();
        self.slots[idx].lock().map_err(|_| poisoned())
    }
}

fn open_reader(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| StorageError::SqliteError {
        message: format!("open lookup reader {}: {e}", path.display()),
    })?;
    apply_read_pragmas(&conn)?;
    Ok(conn)
}

fn poisoned() -> StorageError {
    StorageError::SqliteError {
        message: "lookup reader lock poisoned".to_string(),
    }
}
