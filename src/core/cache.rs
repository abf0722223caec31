//! Cache location and the in-memory tier of the local store
//!
//! The store is two-tier:
//! - L1: in-memory LRU of decoded JSON values, for repeated reads in one run
//! - L2: SQLite file under the user cache directory, the source of truth
//!
//! This module owns the L1 half and the default on-disk location.

use lru::LruCache;
use serde_json::Value;
use std::{
    num::NonZeroUsize,
    path::PathBuf,
    sync::Mutex,
};

use crate::Result;

/// Default number of keys kept in memory.
pub const DEFAULT_MEMORY_CAPACITY: usize = 64;

/// Path: ~/.cache/matchday/store.db
pub fn default_store_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("matchday").join("store.db")
}

/// LRU memory tier keyed by store key.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, Value>>,
}

impl MemoryCache {
    /// Create a memory tier; a zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let size = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(size)),
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.lock()?.get(key).cloned())
    }

    pub fn put(&self, key: &str, value: Value) -> Result<()> {
        self.entries.lock()?.put(key.to_string(), value);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn invalidate(&self, key: &str) -> Result<()> {
        self.entries.lock()?.pop(key);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn clear(&self) -> Result<()> {
        self.entries.lock()?.clear();
        Ok(())
    }

    /// (entries in memory, capacity)
    #[cfg(test)]
    pub(crate) fn stats(&self) -> Result<(usize, usize)> {
        let entries = self.entries.lock()?;
        Ok((entries.len(), entries.cap().get()))
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY)
    }
}
