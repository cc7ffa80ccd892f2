//! Core entity definitions.
//!
//! Defines [`Role`], [`User`], [`Category`], and [`KnowledgeItem`] — the
//! records persisted by the repositories in this module's parent. Serde
//! attributes keep the stored JSON in its original wire form (`camelCase`
//! entry fields, uppercase role values), so databases written by earlier
//! versions of the application read back unchanged.

use serde::{Deserialize, Serialize};

/// Privilege level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full access: create and delete entries, manage categories and users.
    Admin,
    /// Read-only access to the knowledge base.
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// An account that can sign in. Credentials are stored and compared in
/// plaintext — this store is not a hardened trust boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique id.
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in name, unique across all users, matched case-sensitively.
    pub username: String,
    /// Plaintext credential.
    pub password: String,
    pub role: Role,
}

impl User {
    /// Build a new user with a freshly minted id.
    pub fn new(name: &str, username: &str, password: &str, role: Role) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

/// A classification tag for knowledge entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
        }
    }
}

/// A knowledge-base article.
///
/// `content` is markup stored verbatim under the trusted-author model; the
/// store performs no sanitization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    /// Id of the owning [`Category`]. Must reference an existing category
    /// at creation time; categories guard against deletion while referenced.
    #[serde(deserialize_with = "opaque_id")]
    pub category_id: String,
    /// Free text; not required to name a registered user.
    pub author_name: String,
    /// RFC 3339 creation timestamp, immutable once set.
    pub created_at: String,
    /// Display counter. Persisted but not incremented anywhere.
    pub views: u32,
}

impl KnowledgeItem {
    /// Build a new entry with a fresh id, the current timestamp, and a zero
    /// view count.
    pub fn new(title: &str, content: &str, category_id: &str, author_name: &str) -> Self {
        Self {
            id: new_id(),
            title: title.to_string(),
            content: content.to_string(),
            category_id: category_id.to_string(),
            author_name: author_name.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            views: 0,
        }
    }
}

/// Mint a collision-resistant opaque id (UUID v7, time-sortable).
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Deserialize an id that older writers may have stored as a JSON number,
/// coercing it to the canonical string form so id comparison stays uniform.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_as_uppercase() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Admin);
    }

    #[test]
    fn entry_serializes_in_wire_form() {
        let entry = KnowledgeItem::new("Title", "<p>Body</p>", "3", "SysAdmin");
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("categoryId").is_some());
        assert!(value.get("authorName").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["views"], 0);
    }

    #[test]
    fn numeric_ids_coerce_to_strings() {
        let json = r#"{
            "id": 1764000000000,
            "title": "Legacy entry",
            "content": "<p>x</p>",
            "categoryId": 3,
            "authorName": "HelpDesk",
            "createdAt": "2025-01-01T00:00:00Z",
            "views": 4
        }"#;
        let entry: KnowledgeItem = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "1764000000000");
        assert_eq!(entry.category_id, "3");
    }

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
