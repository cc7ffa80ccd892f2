//! Store keys and first-run seed data.
//!
//! Each key is written exactly once, the first time it is found absent;
//! later application starts never overwrite existing data with these
//! defaults.

use chrono::{Duration, Utc};

use super::types::{Category, KnowledgeItem, Role, User};

pub const USERS_KEY: &str = "kb_users_v1";
pub const CATEGORIES_KEY: &str = "kb_categories_v1";
pub const ENTRIES_KEY: &str = "kb_entries_v1";
pub const HEADER_COLOR_KEY: &str = "kb_header_color_v1";

/// Fallback header color when none has been stored.
pub const DEFAULT_HEADER_COLOR: &str = "#EC0000";

pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: "admin-1".to_string(),
            name: "System Administrator".to_string(),
            username: "admin".to_string(),
            password: "123".to_string(),
            role: Role::Admin,
        },
        User {
            id: "user-1".to_string(),
            name: "John Doe".to_string(),
            username: "user".to_string(),
            password: "123".to_string(),
            role: Role::User,
        },
    ]
}

pub fn initial_categories() -> Vec<Category> {
    ["Hardware Support", "Software Installation", "Network & Connectivity", "Security Policies"]
        .iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: (i + 1).to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn initial_entries() -> Vec<KnowledgeItem> {
    vec![
        KnowledgeItem {
            id: "101".to_string(),
            title: "How to configure VPN for remote access".to_string(),
            content: "<ol><li>Open the VPN client.</li>\
                      <li>Enter the gateway address: <strong>vpn.corp.example.com</strong></li>\
                      <li>Use your corporate credentials.</li>\
                      <li>Approve the MFA request via the authenticator app.</li></ol>\
                      <p>If you encounter connection issues, ensure your network password has not expired.</p>"
                .to_string(),
            category_id: "3".to_string(),
            author_name: "SysAdmin".to_string(),
            created_at: (Utc::now() - Duration::days(2)).to_rfc3339(),
            views: 124,
        },
        KnowledgeItem {
            id: "102".to_string(),
            title: "Printer Setup (Floor 3)".to_string(),
            content: "<p>The printer on Floor 3 IP address is <strong>192.168.1.50</strong>.</p>\
                      <p>To install:</p><ul><li>Open File Explorer.</li>\
                      <li>Navigate to <code>\\\\printserv\\floor3</code>.</li>\
                      <li>Double click the printer icon to install drivers automatically.</li></ul>"
                .to_string(),
            category_id: "1".to_string(),
            author_name: "HelpDesk".to_string(),
            created_at: (Utc::now() - Duration::days(5)).to_rfc3339(),
            views: 45,
        },
    ]
}
