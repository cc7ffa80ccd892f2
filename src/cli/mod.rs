pub mod assist;
pub mod categories;
pub mod entries;
pub mod users;

use anyhow::{bail, Result};

use crate::auth::Session;
use crate::config::TomeConfig;
use crate::kb::Database;

/// Open the configured database, seeding it on first run.
pub(crate) fn open_db(config: &TomeConfig) -> Result<Database> {
    Database::open(config.resolved_db_path())
}

/// Authenticate the session from the global `--username/--password` flags.
pub(crate) fn login(
    db: &Database,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Session> {
    let (Some(username), Some(password)) = (username, password) else {
        bail!("this command requires --username and --password");
    };
    match Session::login(db, username, password) {
        Some(session) => Ok(session),
        None => bail!("invalid username or password"),
    }
}

/// Like [`login`], but additionally requires the ADMIN role.
pub(crate) fn login_admin(
    db: &Database,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Session> {
    let session = login(db, username, password)?;
    if !session.is_admin() {
        bail!("access denied: only administrators may run this command");
    }
    Ok(session)
}

/// Verify credentials and print the signed-in identity.
pub fn login_command(
    config: &TomeConfig,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let db = open_db(config)?;
    let session = login(&db, username, password)?;
    let user = session.user();
    println!("Signed in as {} ({})", user.name, user.role);
    Ok(())
}

/// Show or change the dashboard header color. Changing it is admin-only.
pub fn theme(
    config: &TomeConfig,
    color: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let db = open_db(config)?;
    match color {
        Some(color) => {
            login_admin(&db, username, password)?;
            db.settings().set_header_color(color)?;
            println!("Header color set to {color}");
        }
        None => println!("{}", db.settings().header_color()),
    }
    Ok(())
}
