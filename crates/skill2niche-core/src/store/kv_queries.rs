//! Raw key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::StorageKey;
use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE key = ?1";

impl super::Store {
    /// Reads the raw value stored under `key`.
    pub fn get_raw(&self, key: StorageKey<'_>) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key.to_string()], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    /// Overwrites the value stored under `key`.
    pub fn put_raw(&self, key: StorageKey<'_>, value: &str) -> Result<()> {
        self.connection
            .execute(
                UPSERT_VALUE_SQL,
                params![key.to_string(), value, Timestamp::now().to_string()],
            )
            .db_context("Failed to write stored value")?;
        Ok(())
    }

    /// Removes `key`. Returns whether a value existed.
    pub fn remove(&self, key: StorageKey<'_>) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key.to_string()])
            .db_context("Failed to remove stored value")?;
        Ok(removed > 0)
    }
}
