mod helpers;

use chrono::Utc;
use helpers::entry_days_old;
use tome::filter::{EntryFilter, RecencyWindow, SummaryCell};
use tome::kb::types::KnowledgeItem;

/// The dashboard fixture: one fresh VPN entry, one 40-day-old printer entry.
fn fixture() -> Vec<KnowledgeItem> {
    vec![
        entry_days_old("VPN Setup", "<p>steps</p>", "3", 0),
        entry_days_old("Printer", "<p>ip 1.2.3.4</p>", "1", 40),
    ]
}

#[test]
fn text_search_matches_title() {
    let filter = EntryFilter {
        query: Some("vpn".to_string()),
        ..Default::default()
    };
    let visible = filter.apply(&fixture(), Utc::now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "VPN Setup");
}

#[test]
fn text_search_matches_stripped_content() {
    let filter = EntryFilter {
        query: Some("1.2.3.4".to_string()),
        ..Default::default()
    };
    let visible = filter.apply(&fixture(), Utc::now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Printer");
}

#[test]
fn category_filter_matches_exactly() {
    let filter = EntryFilter {
        category_id: Some("1".to_string()),
        ..Default::default()
    };
    let visible = filter.apply(&fixture(), Utc::now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Printer");
}

#[test]
fn last_30_days_excludes_older_entries() {
    let filter = EntryFilter {
        window: Some(RecencyWindow::Last30Days),
        ..Default::default()
    };
    let visible = filter.apply(&fixture(), Utc::now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "VPN Setup");
}

#[test]
fn window_boundary_is_inclusive() {
    let mut on_boundary = entry_days_old("Boundary", "<p>x</p>", "1", 0);
    let now = Utc::now();
    on_boundary.created_at = (now - chrono::Duration::days(7)).to_rfc3339();

    let filter = EntryFilter {
        window: Some(RecencyWindow::Last7Days),
        ..Default::default()
    };
    // Evaluated against the same `now` the cutoff was derived from
    let visible = filter.apply(&[on_boundary], now);
    assert_eq!(visible.len(), 1);
}

#[test]
fn stages_compose_and_preserve_input_order() {
    let entries = vec![
        entry_days_old("VPN Setup", "<p>steps</p>", "3", 0),
        entry_days_old("VPN Troubleshooting", "<p>more steps</p>", "3", 2),
        entry_days_old("VPN History", "<p>archive</p>", "3", 40),
    ];

    let filter = EntryFilter {
        query: Some("vpn".to_string()),
        category_id: Some("3".to_string()),
        window: Some(RecencyWindow::Last30Days),
    };
    let visible = filter.apply(&entries, Utc::now());

    let titles: Vec<&str> = visible.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["VPN Setup", "VPN Troubleshooting"]);
}

#[test]
fn empty_filter_passes_everything_through_unchanged() {
    let entries = fixture();
    let visible = EntryFilter::default().apply(&entries, Utc::now());
    assert_eq!(visible, entries);
}

#[test]
fn search_is_case_insensitive() {
    let filter = EntryFilter {
        query: Some("PRINTER".to_string()),
        ..Default::default()
    };
    assert_eq!(filter.apply(&fixture(), Utc::now()).len(), 1);
}

#[test]
fn summary_is_dropped_when_the_visible_set_changes() {
    let entries = fixture();
    let mut cell = SummaryCell::new();

    let all = EntryFilter::default().apply(&entries, Utc::now());
    cell.observe(&all);
    cell.set("Covers VPN and printer topics.".to_string());

    // Re-running the same derivation keeps the summary
    let all_again = EntryFilter::default().apply(&entries, Utc::now());
    cell.observe(&all_again);
    assert!(cell.text().is_some());

    // Narrowing the filter invalidates it
    let narrowed = EntryFilter {
        query: Some("vpn".to_string()),
        ..Default::default()
    }
    .apply(&entries, Utc::now());
    cell.observe(&narrowed);
    assert_eq!(cell.text(), None);
}
