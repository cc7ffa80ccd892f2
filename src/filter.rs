//! Query/filter pipeline over the entry collection.
//!
//! A pure derivation with no persisted side effect: three independent
//! predicates — text search, category, recency — applied in order, each
//! narrowing the previous stage's result. The pipeline never re-sorts, so
//! output order follows the input collection (newest first).

use chrono::{DateTime, Duration, Utc};

use crate::kb::types::KnowledgeItem;

/// Recency windows offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyWindow {
    Last7Days,
    Last30Days,
}

impl RecencyWindow {
    pub fn days(&self) -> i64 {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
        }
    }
}

impl std::str::FromStr for RecencyWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7" => Ok(Self::Last7Days),
            "30" => Ok(Self::Last30Days),
            _ => Err(format!("unknown recency window: {s} (expected 7 or 30)")),
        }
    }
}

/// Ad-hoc predicates for the visible entry subset. Empty fields disable
/// their stage.
#[derive(Debug, Default, Clone)]
pub struct EntryFilter {
    /// Case-insensitive substring, matched against the title or the
    /// tag-stripped content.
    pub query: Option<String>,
    /// Exact category id match.
    pub category_id: Option<String>,
    /// Keep entries created inside the window, boundary inclusive.
    pub window: Option<RecencyWindow>,
}

impl EntryFilter {
    /// Derive the visible subset of `entries`. `now` anchors the recency
    /// cutoff so callers (and tests) control the clock.
    pub fn apply(&self, entries: &[KnowledgeItem], now: DateTime<Utc>) -> Vec<KnowledgeItem> {
        let mut result: Vec<KnowledgeItem> = entries.to_vec();

        // 1. Text search
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            let needle = query.to_lowercase();
            result.retain(|e| {
                e.title.to_lowercase().contains(&needle)
                    || strip_tags(&e.content).to_lowercase().contains(&needle)
            });
        }

        // 2. Category filter
        if let Some(category_id) = self.category_id.as_deref().filter(|c| !c.is_empty()) {
            result.retain(|e| e.category_id == category_id);
        }

        // 3. Recency filter (entries with unparseable timestamps drop out)
        if let Some(window) = self.window {
            let cutoff = now - Duration::days(window.days());
            result.retain(|e| match DateTime::parse_from_rfc3339(&e.created_at) {
                Ok(created) => created.with_timezone(&Utc) >= cutoff,
                Err(_) => false,
            });
        }

        result
    }
}

/// Remove markup tags, recognized by a generic `<...>` pattern, greedily.
/// An unterminated tag swallows the rest of the input.
pub fn strip_tags(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Holder for an AI-generated overview of a specific visible subset.
///
/// The summary describes one snapshot; whenever the visible id sequence
/// changes the text is dropped, so a stale overview is never shown against
/// a different result set.
#[derive(Debug, Default)]
pub struct SummaryCell {
    snapshot: Vec<String>,
    text: Option<String>,
}

impl SummaryCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe this cell to the latest filter result. Clears the stored
    /// text if the visible ids differ from the snapshot it described.
    pub fn observe(&mut self, visible: &[KnowledgeItem]) {
        let ids: Vec<String> = visible.iter().map(|e| e.id.clone()).collect();
        if ids != self.snapshot {
            self.snapshot = ids;
            self.text = None;
        }
    }

    pub fn set(&mut self, text: String) {
        self.text = Some(text);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
