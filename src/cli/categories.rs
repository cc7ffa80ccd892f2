//! Category management commands.

use anyhow::Result;

use crate::config::TomeConfig;
use crate::kb::types::Category;

pub fn list(config: &TomeConfig) -> Result<()> {
    let db = super::open_db(config)?;
    let categories = db.categories().get_all();
    let entries = db.entries().get_all();

    for category in &categories {
        let in_use = entries
            .iter()
            .filter(|e| e.category_id == category.id)
            .count();
        println!("  [{}] {} ({} entries)", category.id, category.name, in_use);
    }
    Ok(())
}

/// Create a category. Open to any signed-in user, matching the inline
/// creation allowed on the entry form.
pub fn add(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
    name: &str,
) -> Result<()> {
    let db = super::open_db(config)?;
    super::login(&db, username, password)?;

    let category = Category::new(name);
    let id = category.id.clone();
    let updated = db.categories().add(category)?;
    println!("Category {id} created. {} categories total.", updated.len());
    Ok(())
}

/// Rename a category. Admin only.
pub fn rename(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
    id: &str,
    name: &str,
) -> Result<()> {
    let db = super::open_db(config)?;
    super::login_admin(&db, username, password)?;

    db.categories().rename(id, name)?;
    println!("Category {id} renamed to {name}.");
    Ok(())
}

/// Delete a category. Admin only; refused while entries reference it.
pub fn rm(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
    id: &str,
) -> Result<()> {
    let db = super::open_db(config)?;
    super::login_admin(&db, username, password)?;

    let updated = db.categories().delete(id)?;
    println!("Category deleted. {} categories remain.", updated.len());
    Ok(())
}
