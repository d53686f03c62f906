//! Lookup database configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_READ_POOL_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite lookup database. In-memory when unset.
    pub database_path: Option<String>,
    /// Number of read connections. Default: 4.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(DEFAULT_READ_POOL_SIZE)
    }
}
