//! Categories repository.

use crate::store::KvStore;

use super::error::KbError;
use super::seed::{self, CATEGORIES_KEY, ENTRIES_KEY};
use super::types::{Category, KnowledgeItem};

/// Repository view over the stored category collection.
pub struct Categories<'a> {
    store: &'a KvStore,
}

impl<'a> Categories<'a> {
    pub(super) fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Current persisted categories, in insertion order.
    pub fn get_all(&self) -> Vec<Category> {
        self.store.read(CATEGORIES_KEY, seed::initial_categories())
    }

    /// Append a category and return the fresh collection.
    pub fn add(&self, category: Category) -> Result<Vec<Category>, KbError> {
        if category.name.trim().is_empty() {
            return Err(KbError::EmptyField("category name"));
        }

        let mut current: Vec<Category> = self.store.read(CATEGORIES_KEY, Vec::new());
        current.push(category);
        self.store.write(CATEGORIES_KEY, &current)?;
        Ok(current)
    }

    /// Rename the category with the given id and return the fresh
    /// collection. No-op if the id is unknown.
    pub fn rename(&self, id: &str, name: &str) -> Result<Vec<Category>, KbError> {
        if name.trim().is_empty() {
            return Err(KbError::EmptyField("category name"));
        }

        let mut current: Vec<Category> = self.store.read(CATEGORIES_KEY, Vec::new());
        if let Some(category) = current.iter_mut().find(|c| c.id == id) {
            category.name = name.to_string();
        }
        self.store.write(CATEGORIES_KEY, &current)?;
        Ok(current)
    }

    /// Remove the category with the given id and return the fresh
    /// collection.
    ///
    /// Refused with [`KbError::CategoryInUse`] while any entry still
    /// references the category; deletion never cascades, and a refused
    /// delete persists nothing.
    pub fn delete(&self, id: &str) -> Result<Vec<Category>, KbError> {
        let entries: Vec<KnowledgeItem> = self.store.read(ENTRIES_KEY, Vec::new());
        if entries.iter().any(|e| e.category_id == id) {
            return Err(KbError::CategoryInUse(id.to_string()));
        }

        let mut current: Vec<Category> = self.store.read(CATEGORIES_KEY, Vec::new());
        current.retain(|c| c.id != id);
        self.store.write(CATEGORIES_KEY, &current)?;
        Ok(current)
    }
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
    fn add_rejects_blank_name() {
        let db = test_db();
        let result = db.categories().add(Category::new("   "));
        assert!(matches!(result, Err(KbError::EmptyField(_))));
    }

    #[test]
    fn rename_unknown_id_is_a_noop() {
        let db = test_db();
        let before = db.categories().get_all();
        let after = db.categories().rename("no-such-id", "Anything").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn rename_changes_only_the_target() {
        let db = test_db();
        let updated = db.categories().rename("2", "Deployments").unwrap();

        let renamed = updated.iter().find(|c| c.id == "2").unwrap();
        assert_eq!(renamed.name, "Deployments");
        let untouched = updated.iter().find(|c| c.id == "1").unwrap();
        assert_eq!(untouched.name, "Hardware Support");
    }
}
