//! Store schema and connection management

use rusqlite::Connection;
use std::{path::Path, sync::Mutex};
use tracing::debug;

use crate::{
    core::{default_store_path, MemoryCache},
    Result,
};

/// Persistent key/value store for cached league data and user choices.
///
/// Values are JSON documents. Every write is a single `INSERT OR REPLACE`, so a
/// key always holds either its previous value or the complete new one.
pub struct LocalStore {
    pub(crate) conn: Mutex<Connection>,
    pub(crate) memory: MemoryCache,
}

impl LocalStore {
    /// Open the store at the default cache location
    pub fn new() -> Result<Self> {
        Self::open(&default_store_path())
    }

    /// Open (or create) a store file, ensuring tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening local store");
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Store backed by a private in-memory database
    pub fn new_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let store = Self {
            conn: Mutex::new(conn),
            memory: MemoryCache::default(),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the store schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.lock()?.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}
