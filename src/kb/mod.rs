//! The knowledge-base data layer: an injected [`Database`] handle plus one
//! repository per entity collection.
//!
//! Every repository operation follows the same discipline: read the current
//! persisted collection, validate, mutate, persist, and return the fresh
//! collection. Nothing is cached in memory between calls, so a caller never
//! acts on state staler than what is on disk — at the cost of no atomicity
//! across collections, which this single-writer application does not need.

pub mod categories;
pub mod entries;
pub mod error;
pub mod seed;
pub mod settings;
pub mod types;
pub mod users;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use crate::store::{KvStore, StoreError};

pub use categories::Categories;
pub use entries::{DeleteIntent, Entries};
pub use error::KbError;
pub use settings::Settings;
pub use users::Users;

/// Handle to the persistent knowledge base.
///
/// Owns the backing store and hands out short-lived repository views. Pass
/// it by reference to whatever needs data access — there is no ambient
/// singleton, and tests substitute an in-memory database.
pub struct Database {
    store: KvStore,
}

impl Database {
    /// Open (or create) the database file and seed any absent collections.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = crate::db::open_database(path)?;
        Self::with_connection(conn).context("failed to seed database")
    }

    /// Wrap an existing connection and seed any absent collections.
    pub fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        let db = Self {
            store: KvStore::new(conn),
        };
        db.init()?;
        Ok(db)
    }

    /// Seed each collection the first time its key is found absent.
    /// Restarts never overwrite existing data with defaults.
    fn init(&self) -> Result<(), StoreError> {
        if !self.store.contains(seed::CATEGORIES_KEY) {
            self.store
                .write(seed::CATEGORIES_KEY, &seed::initial_categories())?;
        }
        if !self.store.contains(seed::ENTRIES_KEY) {
            self.store
                .write(seed::ENTRIES_KEY, &seed::initial_entries())?;
        }
        if !self.store.contains(seed::USERS_KEY) {
            self.store.write(seed::USERS_KEY, &seed::initial_users())?;
        }
        Ok(())
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.store)
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(&self.store)
    }

    pub fn entries(&self) -> Entries<'_> {
        Entries::new(&self.store)
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings::new(&self.store)
    }

    /// Direct access to the backing store.
    pub fn store(&self) -> &KvStore {
        &self.store
    }
}
