//! Repository error taxonomy.

use crate::store::StoreError;

/// Errors surfaced by repository operations.
///
/// Validation and conflict variants are raised before anything is
/// persisted; a failed operation never leaves a partial write behind.
#[derive(Debug, thiserror::Error)]
pub enum KbError {
    /// A required field was missing or blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Another user already owns this username.
    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    /// The entry's category id does not name an existing category.
    #[error("category not found: {0}")]
    UnknownCategory(String),

    /// The category is still referenced by at least one entry, so deleting
    /// it was refused.
    #[error("category {0} is still referenced by existing entries")]
    CategoryInUse(String),

    /// The backing store failed to persist a write.
    #[error(transparent)]
    Store(#[from] StoreError),
}
