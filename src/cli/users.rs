//! User management commands.

use anyhow::{bail, Result};

use crate::auth;
use crate::config::TomeConfig;
use crate::kb::types::{Role, User};

/// List accounts (without credentials). Admin only.
pub fn list(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let db = super::open_db(config)?;
    super::login_admin(&db, username, password)?;

    for user in db.users().get_all() {
        println!("  [{}] {} ({}, {})", user.id, user.name, user.username, user.role);
    }
    Ok(())
}

/// Register a new account. Open — no session required.
pub fn register(
    config: &TomeConfig,
    name: &str,
    login: &str,
    password: &str,
    role: Role,
) -> Result<()> {
    let db = super::open_db(config)?;
    let user = User::new(name, login, password, role);
    let updated = auth::register(&db, user)?;
    println!("Registration successful. {} users total.", updated.len());
    Ok(())
}

/// Edit an account. Admins may edit anyone; others only themselves, and
/// only an admin may change a role.
#[allow(clippy::too_many_arguments)]
pub fn edit(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
    id: &str,
    name: Option<String>,
    login: Option<String>,
    role: Option<Role>,
    new_password: Option<String>,
) -> Result<()> {
    let db = super::open_db(config)?;
    let session = super::login(&db, username, password)?;

    if !session.is_admin() && session.user().id != id {
        bail!("access denied: you may only edit your own account");
    }
    if role.is_some() && !session.is_admin() {
        bail!("access denied: only administrators may change roles");
    }

    let users = db.users();
    let Some(mut target) = users.get_all().into_iter().find(|u| u.id == id) else {
        bail!("no such user: {id}");
    };

    if let Some(name) = name {
        target.name = name;
    }
    if let Some(login) = login {
        target.username = login;
    }
    if let Some(role) = role {
        target.role = role;
    }
    // Empty means "keep the stored password"
    target.password = new_password.unwrap_or_default();

    users.update(target)?;
    println!("User {id} updated.");
    Ok(())
}

/// Delete an account. Admin only, and never the signed-in identity.
pub fn rm(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
    id: &str,
) -> Result<()> {
    let db = super::open_db(config)?;
    let session = super::login_admin(&db, username, password)?;

    if !session.can_delete_user(id) {
        bail!("you cannot delete your own account while signed in");
    }

    let updated = db.users().delete(id)?;
    println!("User removed. {} users remain.", updated.len());
    Ok(())
}
