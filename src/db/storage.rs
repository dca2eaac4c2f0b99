use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::MatcherError;

/// String key-value storage the record store persists through.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, MatcherError>;
    fn set(&self, key: &str, value: &str) -> Result<(), MatcherError>;

    /// Atomic read-modify-write of one key. `apply` sees the current value
    /// and returns the value to store (`None` leaves it untouched) along
    /// with its result. No other writer can interleave with the update.
    fn update<T, F>(&self, key: &str, apply: F) -> Result<T, MatcherError>
    where
        F: FnOnce(Option<String>) -> Result<(Option<String>, T), MatcherError>;
}

/// Process-local backend. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, MatcherError> {
        self.entries
            .lock()
            .map_err(|e| MatcherError::StorageError(e.to_string()))
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, MatcherError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MatcherError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn update<T, F>(&self, key: &str, apply: F) -> Result<T, MatcherError>
    where
        F: FnOnce(Option<String>) -> Result<(Option<String>, T), MatcherError>,
    {
        let mut entries = self.lock()?;
        let (next, out) = apply(entries.get(key).cloned())?;
        if let Some(value) = next {
            entries.insert(key.to_string(), value);
        }
        Ok(out)
    }
}

/// Durable backend on top of the `kv_store` table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

fn db_error(e: rusqlite::Error) -> MatcherError {
    MatcherError::DatabaseError(e.to_string())
}

fn read_value(conn: &Connection, key: &str) -> Result<Option<String>, MatcherError> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(db_error)
}

fn write_value(conn: &Connection, key: &str, value: &str) -> Result<(), MatcherError> {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        params![key, value],
    )
    .map_err(db_error)?;
    debug!("Wrote {} bytes to key '{}'", value.len(), key);
    Ok(())
}

impl StorageBackend for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, MatcherError> {
        read_value(&self.conn, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MatcherError> {
        write_value(&self.conn, key, value)
    }

    fn update<T, F>(&self, key: &str, apply: F) -> Result<T, MatcherError>
    where
        F: FnOnce(Option<String>) -> Result<(Option<String>, T), MatcherError>,
    {
        // IMMEDIATE takes the write lock up front; other connections wait
        // on the busy timeout set in `init_db`. Dropping without commit
        // rolls back.
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)
            .map_err(db_error)?;
        let (next, out) = apply(read_value(&tx, key)?)?;
        if let Some(value) = next {
            write_value(&tx, key, &value)?;
        }
        tx.commit().map_err(db_error)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::{init_db, init_memory_db};

    #[test]
    fn memory_clones_share_entries() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(b.get("missing").unwrap(), None);
    }

    #[test]
    fn sqlite_overwrites_existing_key() {
        let storage = SqliteStorage::new(init_memory_db().unwrap());
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn sqlite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        let path = path.to_str().unwrap();

        SqliteStorage::new(init_db(path).unwrap())
            .set("k", "kept")
            .unwrap();
        let reopened = SqliteStorage::new(init_db(path).unwrap());
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn failed_update_leaves_value_untouched() {
        let storage = SqliteStorage::new(init_memory_db().unwrap());
        storage.set("k", "before").unwrap();
        let result: Result<(), _> = storage.update("k", |_| {
            Err(MatcherError::StorageError("boom".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("before"));

        let len = storage
            .update("k", |current| {
                let next = format!("{}+after", current.unwrap_or_default());
                let len = next.len();
                Ok((Some(next), len))
            })
            .unwrap();
        assert_eq!(len, 12);
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("before+after"));
    }

    #[test]
    fn memory_update_without_value_keeps_key_absent() {
        let storage = MemoryStorage::new();
        let seen = storage.update("k", |current| Ok((None, current))).unwrap();
        assert_eq!(seen, None);
        assert_eq!(storage.get("k").unwrap(), None);
    }
}
