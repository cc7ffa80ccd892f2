//! Presentation settings repository.
//!
//! A single scalar today: the dashboard header color. Unlike the entity
//! collections, settings are not seeded eagerly — the default applies on
//! read until a value is first written.

use crate::store::KvStore;

use super::error::KbError;
use super::seed::{DEFAULT_HEADER_COLOR, HEADER_COLOR_KEY};

/// Repository view over stored presentation settings.
pub struct Settings<'a> {
    store: &'a KvStore,
}

impl<'a> Settings<'a> {
    pub(super) fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// The stored header color, or the fixed fallback when absent.
    pub fn header_color(&self) -> String {
        self.store
            .read(HEADER_COLOR_KEY, DEFAULT_HEADER_COLOR.to_string())
    }

    pub fn set_header_color(&self, color: &str) -> Result<(), KbError> {
        self.store.write(HEADER_COLOR_KEY, &color)?;
        Ok(())
    }
}
