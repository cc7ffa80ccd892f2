mod assist;
mod auth;
mod cli;
mod config;
mod db;
mod filter;
mod kb;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use filter::RecencyWindow;
use kb::types::Role;

#[derive(Parser)]
#[command(name = "tome", version, about = "Local IT knowledge base with AI-assisted drafting")]
struct Cli {
    /// Username for commands that need a signed-in session
    #[arg(short = 'u', long, global = true)]
    username: Option<String>,

    /// Password for commands that need a signed-in session
    #[arg(short = 'p', long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List entries, with optional search and filters
    List {
        /// Case-insensitive substring match on title or content
        #[arg(long)]
        search: Option<String>,
        /// Category id or exact name
        #[arg(long)]
        category: Option<String>,
        /// Only entries from the last N days (7 or 30)
        #[arg(long)]
        days: Option<RecencyWindow>,
        /// Append an AI overview of the visible results
        #[arg(long)]
        summary: bool,
    },
    /// Show one entry in full
    Show { id: String },
    /// Create an entry (admin)
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        /// Category id or exact name
        #[arg(long)]
        category: Option<String>,
        /// Create and use a new category with this name
        #[arg(long)]
        new_category: Option<String>,
        /// Author display name; defaults to the signed-in user's
        #[arg(long)]
        author: Option<String>,
        /// Draft the content from the title with the AI assistant
        #[arg(long)]
        ai: bool,
    },
    /// Delete an entry after confirmation (admin)
    Rm {
        id: String,
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Verify credentials and show the signed-in identity
    Login,
    /// Ask the AI assistant for a draft answer
    Ask {
        question: String,
        /// Extra context for the assistant
        #[arg(long)]
        context: Option<String>,
    },
    /// Show or set the dashboard header color (setting is admin-only)
    Theme { color: Option<String> },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List categories with their entry counts
    List,
    /// Create a category
    Add { name: String },
    /// Rename a category (admin)
    Rename { id: String, name: String },
    /// Delete an unreferenced category (admin)
    Rm { id: String },
}

#[derive(Subcommand)]
enum UserAction {
    /// List accounts (admin)
    List,
    /// Register a new account
    Register {
        name: String,
        login: String,
        #[arg(value_name = "PASSWORD")]
        new_password: String,
        #[arg(long, default_value = "USER")]
        role: Role,
    },
    /// Edit an account (admin, or your own)
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// New sign-in name
        #[arg(long)]
        login: Option<String>,
        /// ADMIN or USER (admin only)
        #[arg(long)]
        role: Option<Role>,
        /// New password; omit to keep the current one
        #[arg(long)]
        new_password: Option<String>,
    },
    /// Delete an account (admin, never your own)
    Rm { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::TomeConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for command output.
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let username = cli.username.as_deref();
    let password = cli.password.as_deref();

    match cli.command {
        Command::List {
            search,
            category,
            days,
            summary,
        } => {
            cli::entries::list(&config, search, category, days, summary).await?;
        }
        Command::Show { id } => {
            cli::entries::show(&config, &id)?;
        }
        Command::Add {
            title,
            content,
            category,
            new_category,
            author,
            ai,
        } => {
            cli::entries::add(
                &config,
                username,
                password,
                title,
                content,
                category,
                new_category,
                author,
                ai,
            )
            .await?;
        }
        Command::Rm { id, yes } => {
            cli::entries::rm(&config, username, password, &id, yes)?;
        }
        Command::Category { action } => match action {
            CategoryAction::List => cli::categories::list(&config)?,
            CategoryAction::Add { name } => {
                cli::categories::add(&config, username, password, &name)?;
            }
            CategoryAction::Rename { id, name } => {
                cli::categories::rename(&config, username, password, &id, &name)?;
            }
            CategoryAction::Rm { id } => {
                cli::categories::rm(&config, username, password, &id)?;
            }
        },
        Command::User { action } => match action {
            UserAction::List => cli::users::list(&config, username, password)?,
            UserAction::Register {
                name,
                login,
                new_password,
                role,
            } => {
                cli::users::register(&config, &name, &login, &new_password, role)?;
            }
            UserAction::Edit {
                id,
                name,
                login,
                role,
                new_password,
            } => {
                cli::users::edit(
                    &config,
                    username,
                    password,
                    &id,
                    name,
                    login,
                    role,
                    new_password,
                )?;
            }
            UserAction::Rm { id } => {
                cli::users::rm(&config, username, password, &id)?;
            }
        },
        Command::Login => {
            cli::login_command(&config, username, password)?;
        }
        Command::Ask { question, context } => {
            cli::assist::ask(&config, &question, context.as_deref()).await?;
        }
        Command::Theme { color } => {
            cli::theme(&config, color.as_deref(), username, password)?;
        }
    }

    Ok(())
}
