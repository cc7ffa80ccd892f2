//! Knowledge entries repository.
//!
//! Entries are prepended on insert so the stored collection stays
//! newest-first. Deletion is two-phase: [`Entries::begin_delete`] returns a
//! [`DeleteIntent`] that touches nothing until confirmed, and cancelling
//! (or dropping) the intent leaves the store unchanged.

use crate::store::KvStore;

use super::error::KbError;
use super::seed::{self, ENTRIES_KEY};
use super::types::KnowledgeItem;

/// Repository view over the stored entry collection.
pub struct Entries<'a> {
    store: &'a KvStore,
}

impl<'a> Entries<'a> {
    pub(super) fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Current persisted entries, newest first.
    pub fn get_all(&self) -> Vec<KnowledgeItem> {
        self.store.read(ENTRIES_KEY, seed::initial_entries())
    }

    /// Prepend an entry and return the fresh collection.
    ///
    /// The entry's category must exist at creation time; title and content
    /// must be non-empty. Nothing is persisted on a failed validation.
    pub fn add(&self, entry: KnowledgeItem) -> Result<Vec<KnowledgeItem>, KbError> {
        if entry.title.trim().is_empty() {
            return Err(KbError::EmptyField("title"));
        }
        if entry.content.trim().is_empty() {
            return Err(KbError::EmptyField("content"));
        }

        let categories = super::Categories::new(self.store).get_all();
        if !categories.iter().any(|c| c.id == entry.category_id) {
            return Err(KbError::UnknownCategory(entry.category_id));
        }

        let mut current: Vec<KnowledgeItem> = self.store.read(ENTRIES_KEY, Vec::new());
        current.insert(0, entry);
        self.store.write(ENTRIES_KEY, &current)?;
        Ok(current)
    }

    /// Replace the entry with the candidate's id and return the fresh
    /// collection. No-op if the id is unknown.
    pub fn update(&self, candidate: KnowledgeItem) -> Result<Vec<KnowledgeItem>, KbError> {
        let mut current: Vec<KnowledgeItem> = self.store.read(ENTRIES_KEY, Vec::new());
        if let Some(existing) = current.iter_mut().find(|e| e.id == candidate.id) {
            *existing = candidate;
        }
        self.store.write(ENTRIES_KEY, &current)?;
        Ok(current)
    }

    /// Start a deletion. The returned intent mutates nothing until
    /// [`DeleteIntent::confirm`] runs.
    pub fn begin_delete(&self, id: &str) -> DeleteIntent {
        DeleteIntent { id: id.to_string() }
    }

    /// Remove the entry with the given id and return the fresh collection.
    ///
    /// Ids are compared as canonical strings (legacy numeric ids are
    /// coerced at deserialization), so a stale numeric form still matches.
    pub fn delete(&self, id: &str) -> Result<Vec<KnowledgeItem>, KbError> {
        // Read from storage right before mutating so the delete acts on the
        // latest persisted state, not a stale snapshot.
        let mut current: Vec<KnowledgeItem> = self.store.read(ENTRIES_KEY, Vec::new());
        current.retain(|e| e.id != id);
        self.store.write(ENTRIES_KEY, &current)?;
        Ok(current)
    }
}

/// A pending entry deletion awaiting confirmation.
#[must_use = "a delete intent has no effect until confirmed"]
pub struct DeleteIntent {
    id: String,
}

impl DeleteIntent {
    /// Id of the entry this intent targets.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Execute the deletion and return the fresh collection.
    pub fn confirm(self, entries: &Entries<'_>) -> Result<Vec<KnowledgeItem>, KbError> {
        entries.delete(&self.id)
    }

    /// Abandon the deletion. The stored collection is untouched.
    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use crate::db;
    use crate::kb::error::KbError;
    use crate::kb::Database;

    use super::*;

    fn test_db() -> Database {
        Database::with_connection(db::open_memory_database().unwrap()).unwrap()
    }

    #[test]
    fn add_prepends_newest_first() {
        let db = test_db();
        let entry = KnowledgeItem::new("Reset MFA token", "<p>Call the helpdesk.</p>", "4", "HelpDesk");
        let id = entry.id.clone();

        let updated = db.entries().add(entry).unwrap();
        assert_eq!(updated[0].id, id);
        assert_eq!(updated.len(), 3);
    }

    #[test]
    fn add_requires_existing_category() {
        let db = test_db();
        let entry = KnowledgeItem::new("Orphan", "<p>x</p>", "999", "HelpDesk");
        assert!(matches!(
            db.entries().add(entry),
            Err(KbError::UnknownCategory(id)) if id == "999"
        ));
        // Nothing persisted
        assert_eq!(db.entries().get_all().len(), 2);
    }

    #[test]
    fn delete_matches_legacy_numeric_ids() {
        let db = test_db();
        // A collection persisted by an older writer, ids as JSON numbers.
        db.store()
            .write(
                ENTRIES_KEY,
                &serde_json::json!([{
                    "id": 101,
                    "title": "Legacy",
                    "content": "<p>x</p>",
                    "categoryId": 1,
                    "authorName": "HelpDesk",
                    "createdAt": "2025-01-01T00:00:00Z",
                    "views": 0
                }]),
            )
            .unwrap();

        let updated = db.entries().delete("101").unwrap();
        assert!(updated.is_empty());
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let db = test_db();
        let before = db.entries().get_all();
        let ghost = KnowledgeItem::new("Ghost", "<p>x</p>", "1", "Nobody");
        let after = db.entries().update(ghost).unwrap();
        assert_eq!(before, after);
    }
}
