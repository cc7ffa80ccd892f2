#![allow(dead_code)]

use chrono::{Duration, Utc};
use tome::db;
use tome::kb::types::KnowledgeItem;
use tome::kb::Database;

/// Open a fresh in-memory database, seeded with the default data.
pub fn test_db() -> Database {
    Database::with_connection(db::open_memory_database().unwrap()).unwrap()
}

/// An entry fixture created `days` days ago.
pub fn entry_days_old(title: &str, content: &str, category_id: &str, days: i64) -> KnowledgeItem {
    let mut entry = KnowledgeItem::new(title, content, category_id, "Fixture");
    entry.created_at = (Utc::now() - Duration::days(days)).to_rfc3339();
    entry
}
