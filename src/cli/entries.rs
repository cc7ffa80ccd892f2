//! Entry commands: list/search, show, add, and two-phase delete.

use anyhow::{bail, Result};
use chrono::Utc;
use std::io::Write;

use crate::assist::Assistant;
use crate::config::TomeConfig;
use crate::filter::{EntryFilter, RecencyWindow, SummaryCell};
use crate::kb::types::{Category, KnowledgeItem};

/// List the entries visible under the given search and filters.
pub async fn list(
    config: &TomeConfig,
    search: Option<String>,
    category: Option<String>,
    days: Option<RecencyWindow>,
    summary: bool,
) -> Result<()> {
    let db = super::open_db(config)?;
    let entries = db.entries().get_all();
    let categories = db.categories().get_all();

    let category_id = match category {
        Some(wanted) => Some(resolve_category(&categories, &wanted)?),
        None => None,
    };

    let filter = EntryFilter {
        query: search,
        category_id,
        window: days,
    };
    let visible = filter.apply(&entries, Utc::now());

    if visible.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    println!("Found {} result(s)\n", visible.len());
    for entry in &visible {
        let category_name = categories
            .iter()
            .find(|c| c.id == entry.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized");

        println!("  [{}] {}", entry.id, entry.title);
        println!(
            "      {} • by {} on {} • {} views",
            category_name,
            entry.author_name,
            entry.created_at.get(..10).unwrap_or(&entry.created_at),
            entry.views,
        );
        println!();
    }

    if summary {
        let assistant = Assistant::new(&config.assist);
        let titles: Vec<String> = visible.iter().map(|e| e.title.clone()).collect();

        let mut cell = SummaryCell::new();
        cell.observe(&visible);
        cell.set(assistant.summarize(&titles).await);
        if let Some(text) = cell.text() {
            println!("Quick summary: {text}");
        }
    }

    Ok(())
}

/// Print one entry in full. Viewing does not touch the stored counter.
pub fn show(config: &TomeConfig, id: &str) -> Result<()> {
    let db = super::open_db(config)?;
    let entries = db.entries().get_all();
    let Some(entry) = entries.iter().find(|e| e.id == id) else {
        bail!("no such entry: {id}");
    };

    let categories = db.categories().get_all();
    let category_name = categories
        .iter()
        .find(|c| c.id == entry.category_id)
        .map(|c| c.name.as_str())
        .unwrap_or("Uncategorized");

    println!("{}", entry.title);
    println!(
        "{} • by {} on {} • {} views\n",
        category_name, entry.author_name, entry.created_at, entry.views
    );
    println!("{}", entry.content);
    Ok(())
}

/// Create an entry. Admin only; content can be drafted by the assistant.
#[allow(clippy::too_many_arguments)]
pub async fn add(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
    title: String,
    content: Option<String>,
    category: Option<String>,
    new_category: Option<String>,
    author: Option<String>,
    ai: bool,
) -> Result<()> {
    let db = super::open_db(config)?;
    let session = super::login_admin(&db, username, password)?;

    let content = match content {
        Some(content) => content,
        None if ai => {
            Assistant::new(&config.assist)
                .draft_answer(&title, None)
                .await
        }
        None => bail!("provide --content, or --ai to draft it from the title"),
    };

    let category_id = match (category, new_category) {
        (Some(wanted), None) => resolve_category(&db.categories().get_all(), &wanted)?,
        (None, Some(name)) => {
            // Inline category creation, as the entry form allows
            let category = Category::new(&name);
            let id = category.id.clone();
            db.categories().add(category)?;
            id
        }
        _ => bail!("choose exactly one of --category or --new-category"),
    };

    let author = author.unwrap_or_else(|| session.user().name.clone());
    let entry = KnowledgeItem::new(&title, &content, &category_id, &author);
    let updated = db.entries().add(entry)?;

    println!("Entry created. {} entries total.", updated.len());
    Ok(())
}

/// Delete an entry after confirmation. Admin only.
pub fn rm(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
    id: &str,
    yes: bool,
) -> Result<()> {
    let db = super::open_db(config)?;
    super::login_admin(&db, username, password)?;

    let entries = db.entries();
    let intent = entries.begin_delete(id);

    if !yes {
        print!("Permanently delete entry {}? Type y to confirm: ", intent.id());
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            intent.cancel();
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let updated = intent.confirm(&entries)?;
    println!("Entry deleted. {} entries remain.", updated.len());
    Ok(())
}

/// Resolve a category argument given as an id or an exact name.
fn resolve_category(categories: &[Category], wanted: &str) -> Result<String> {
    categories
        .iter()
        .find(|c| c.id == wanted || c.name == wanted)
        .map(|c| c.id.clone())
        .ok_or_else(|| anyhow::anyhow!("no such category: {wanted}"))
}
