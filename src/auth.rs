//! Session gate: credential checks and privilege guards.
//!
//! Credentials are compared in plaintext, exact and case-sensitive. There
//! is no hashing, rate limiting, or lockout — this store is scoped to a
//! local, single-user session and is explicitly not a hardened boundary.

use crate::kb::types::{Role, User};
use crate::kb::{Database, KbError};

/// Look up the first user whose username and password both match exactly.
/// `None` signals unknown user or wrong password alike.
pub fn authenticate(db: &Database, username: &str, password: &str) -> Option<User> {
    db.users()
        .get_all()
        .into_iter()
        .find(|u| u.username == username && u.password == password)
}

/// Register a new account. Delegates to the users repository, which
/// enforces username uniqueness.
pub fn register(db: &Database, candidate: User) -> Result<Vec<User>, KbError> {
    db.users().add(candidate)
}

/// An authenticated identity and its privilege checks.
pub struct Session {
    user: User,
}

impl Session {
    /// Authenticate and open a session, or `None` on bad credentials.
    pub fn login(db: &Database, username: &str, password: &str) -> Option<Self> {
        authenticate(db, username, password).map(|user| Self { user })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    /// Whether this session may delete the given user. Admins may delete
    /// anyone except their own active identity.
    pub fn can_delete_user(&self, target_id: &str) -> bool {
        self.is_admin() && self.user.id != target_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn test_db() -> Database {
        Database::with_connection(db::open_memory_database().unwrap()).unwrap()
    }

    #[test]
    fn authenticate_is_case_sensitive() {
        let db = test_db();
        assert!(authenticate(&db, "admin", "123").is_some());
        assert!(authenticate(&db, "Admin", "123").is_none());
    }

    #[test]
    fn admin_session_cannot_delete_itself() {
        let db = test_db();
        let session = Session::login(&db, "admin", "123").unwrap();
        assert!(session.is_admin());
        assert!(!session.can_delete_user("admin-1"));
        assert!(session.can_delete_user("user-1"));
    }

    #[test]
    fn plain_user_cannot_delete_anyone() {
        let db = test_db();
        let session = Session::login(&db, "user", "123").unwrap();
        assert!(!session.is_admin());
        assert!(!session.can_delete_user("admin-1"));
    }
}
