//! User accounts repository.

use crate::store::KvStore;

use super::error::KbError;
use super::seed::{self, USERS_KEY};
use super::types::User;

/// Repository view over the stored user collection.
pub struct Users<'a> {
    store: &'a KvStore,
}

impl<'a> Users<'a> {
    pub(super) fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Current persisted users, in insertion order.
    pub fn get_all(&self) -> Vec<User> {
        self.store.read(USERS_KEY, seed::initial_users())
    }

    /// Append a user and return the fresh collection.
    ///
    /// Fails with [`KbError::DuplicateUsername`] if the username is taken;
    /// nothing is persisted on failure.
    pub fn add(&self, user: User) -> Result<Vec<User>, KbError> {
        if user.name.trim().is_empty() {
            return Err(KbError::EmptyField("name"));
        }
        if user.username.trim().is_empty() {
            return Err(KbError::EmptyField("username"));
        }
        if user.password.is_empty() {
            return Err(KbError::EmptyField("password"));
        }

        let mut current: Vec<User> = self.store.read(USERS_KEY, Vec::new());
        if current.iter().any(|u| u.username == user.username) {
            return Err(KbError::DuplicateUsername(user.username));
        }

        current.push(user);
        self.store.write(USERS_KEY, &current)?;
        Ok(current)
    }

    /// Replace the user with the candidate's id and return the fresh
    /// collection. No-op if the id is unknown.
    ///
    /// An empty candidate password means "keep the stored password", so
    /// edit forms can leave the credential untouched.
    pub fn update(&self, candidate: User) -> Result<Vec<User>, KbError> {
        let mut current: Vec<User> = self.store.read(USERS_KEY, Vec::new());

        if let Some(existing) = current.iter_mut().find(|u| u.id == candidate.id) {
            let password = if candidate.password.is_empty() {
                existing.password.clone()
            } else {
                candidate.password.clone()
            };
            *existing = User {
                password,
                ..candidate
            };
        }

        self.store.write(USERS_KEY, &current)?;
        Ok(current)
    }

    /// Remove the user with the given id and return the fresh collection.
    ///
    /// The self-delete guard lives in the session gate, not here — the
    /// repository treats every id uniformly.
    pub fn delete(&self, id: &str) -> Result<Vec<User>, KbError> {
        let mut current: Vec<User> = self.store.read(USERS_KEY, Vec::new());
        current.retain(|u| u.id != id);
        self.store.write(USERS_KEY, &current)?;
        Ok(current)
    }
}
