//! SQLite implementation of the ScoreStore trait.
//!
//! This is the primary storage backend for Tally. It uses rusqlite with
//! bundled SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::ScoreStore;

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking
/// to avoid blocking the async runtime; `incr` performs its whole
/// read-modify-write inside one mutex section, so concurrent increments
/// against the same key never lose updates.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        tracing::debug!(path = %path.display(), "opened score store");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a blocking closure against the locked connection on the
    /// blocking pool.
    async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|e| {
                StoreError::Database(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                    Some(format!("mutex poisoned: {}", e)),
                ))
            })?;
            f(&conn)
        })
        .await
        .map_err(|e| {
            StoreError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                Some(format!("spawn_blocking failed: {}", e)),
            ))
        })?
    }
}

/// Parse a stored decimal-string value.
fn parse_value(key: &str, raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| {
        StoreError::InvalidData(format!("non-integer value {:?} stored at {}", raw, key))
    })
}

/// Read a key's value inside an already-locked connection.
fn read_value(conn: &Connection, key: &str) -> Result<Option<i64>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM scores WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    raw.map(|raw| parse_value(key, &raw)).transpose()
}

#[async_trait]
impl ScoreStore for SqliteStore {
    async fn exists(&self, key: &str) -> Result<bool> {
        let key = key.to_string();
        self.run(move |conn| {
            let found: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM scores WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(found.is_some())
        })
        .await
    }

    async fn get(&self, key: &str) -> Result<i64> {
        let key = key.to_string();
        self.run(move |conn| {
            read_value(conn, &key)?.ok_or_else(|| StoreError::NotFound(key.clone()))
        })
        .await
    }

    async fn set(&self, key: &str, value: i64) -> Result<()> {
        let key = key.to_string();
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO scores (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value.to_string()],
            )?;
            Ok(())
        })
        .await
    }

    async fn incr(&self, key: &str, delta: i64) -> Result<i64> {
        let key = key.to_string();
        // The read, add, and write all happen under the one mutex guard.
        self.run(move |conn| {
            let current = read_value(conn, &key)?.unwrap_or(0);
            let next = current
                .checked_add(delta)
                .ok_or_else(|| StoreError::InvalidData(format!("counter overflow for {key}")))?;
            conn.execute(
                "INSERT INTO scores (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, next.to_string()],
            )?;
            Ok(next)
        })
        .await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.run(move |conn| {
            let affected = conn.execute("DELETE FROM scores WHERE key = ?1", params![key])?;
            if affected == 0 {
                return Err(StoreError::NotFound(key.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn scan(&self, prefix: &str) -> Result<Vec<(String, i64)>> {
        let prefix = prefix.to_string();
        self.run(move |conn| {
            let mut stmt = conn.prepare(
                // substr comparison instead of LIKE so prefixes containing
                // '%' or '_' scan literally.
                "SELECT key, value FROM scores WHERE substr(key, 1, length(?1)) = ?1",
            )?;
            let rows = stmt.query_map(params![prefix], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;

            let mut entries = Vec::new();
            for row in rows {
                let (key, raw) = row?;
                let value = parse_value(&key, &raw)?;
                entries.push((key, value));
            }
            Ok(entries)
        })
        .await
    }
}
