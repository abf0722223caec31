//! Basic store read/write operations

use rusqlite::{params, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{keys::StoreKey, schema::LocalStore};
use crate::{LeagueId, ResourceType, Result};

impl LocalStore {
    /// Read a raw value (checks memory first, then disk)
    ///
    /// The memory tier is only written while the connection lock is held, so
    /// a disk miss can never promote a value that a concurrent write replaced.
    pub fn get_raw(&self, key: &StoreKey) -> Result<Option<Value>> {
        let key = key.to_store_key();

        if let Some(value) = self.memory.get(&key)? {
            return Ok(Some(value));
        }

        let conn = self.conn.lock()?;
        let text: Option<String> = conn
            .query_row("SELECT value FROM kv WHERE key = ?", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        match text {
            Some(text) => {
                let value: Value = serde_json::from_str(&text)?;
                self.memory.put(&key, value.clone())?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Replace a value wholesale; disk and memory change under one lock
    pub fn put_raw(&self, key: &StoreKey, value: &Value) -> Result<()> {
        let key = key.to_store_key();
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let text = serde_json::to_string(value)?;

        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?, ?, ?)",
            params![key, text, now as i64],
        )?;
        self.memory.put(&key, value.clone())?;

        Ok(())
    }

    pub fn get<T: DeserializeOwned>(&self, key: &StoreKey) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn put<T: Serialize + ?Sized>(&self, key: &StoreKey, value: &T) -> Result<()> {
        self.put_raw(key, &serde_json::to_value(value)?)
    }

    /// Seconds since the epoch of the last write to `key`
    pub fn updated_at(&self, key: &StoreKey) -> Result<Option<u64>> {
        let secs: Option<i64> = self
            .conn
            .lock()?
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?",
                params![key.to_store_key()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(secs.map(|s| s.max(0) as u64))
    }

    /// Cached list for one league resource; `None` means never fetched
    pub fn get_list<T: DeserializeOwned>(
        &self,
        resource: ResourceType,
        league_id: &LeagueId,
    ) -> Result<Option<Vec<T>>> {
        self.get(&StoreKey::resource(resource, league_id))
    }

    /// Replace the cached list for one league resource
    pub fn put_list<T: Serialize>(
        &self,
        resource: ResourceType,
        league_id: &LeagueId,
        list: &[T],
    ) -> Result<()> {
        self.put(&StoreKey::resource(resource, league_id), list)
    }

    /// All stored keys, sorted
    pub fn keys(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}
