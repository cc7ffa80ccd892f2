//! Key-value backing store over the `kv` table.
//!
//! Every value is an independently JSON-serialized blob keyed by string.
//! Reads that fail — missing key, corrupt JSON, database error — fall back
//! to the caller-supplied default and are only logged, so a damaged value
//! never takes the application down. Writes serialize and persist
//! immediately; there is no batching and no transactionality across keys.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors from the write path of the backing store.
///
/// Read-side failures are swallowed into defaults and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The durable key-value store backing all repositories.
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Read and deserialize the value under `key`, or return `default` if
    /// the key is absent or the stored value cannot be decoded.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw: Option<String> = match self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read from store, using default");
                return default;
            }
        };

        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = %e, "corrupt value in store, using default");
                    default
                }
            },
            None => default,
        }
    }

    /// Serialize `value` and persist it under `key`, replacing any previous
    /// value. The write is durable once this returns.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, raw],
        )?;
        Ok(())
    }

    /// Whether a value has ever been written under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.conn
            .query_row("SELECT 1 FROM kv WHERE key = ?1", params![key], |_| Ok(()))
            .optional()
            .map(|row| row.is_some())
            .unwrap_or(false)
    }
}
