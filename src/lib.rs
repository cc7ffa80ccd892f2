//! Local IT knowledge base — categorized articles, filtered search, and
//! AI-assisted drafting.
//!
//! Tome keeps a small helpdesk knowledge base on disk: articles organized
//! into categories, user accounts with two privilege levels, and a couple
//! of presentation settings, all stored as JSON values in a single-file
//! SQLite key-value table. An optional Gemini-backed assistant drafts
//! entry bodies and summarizes search results, strictly best-effort.
//!
//! # Architecture
//!
//! - **Storage**: one SQLite `kv` table; each key holds an independently
//!   JSON-serialized collection or scalar
//! - **Repositories**: read-through/write-through views per entity — every
//!   operation re-reads persisted state, mutates, persists, and returns
//!   the fresh collection
//! - **Query**: a pure three-stage filter pipeline (text search over
//!   tag-stripped content, category, recency)
//! - **Sessions**: plaintext credential checks, deliberately unhardened —
//!   this is a local single-user tool, not a trust boundary
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization and schema
//! - [`store`] — The key-value backing store abstraction
//! - [`kb`] — Entity repositories: users, categories, entries, settings
//! - [`auth`] — Session gate and privilege guards
//! - [`filter`] — The query/filter pipeline and summary invalidation
//! - [`assist`] — Best-effort AI drafting and summarizing

pub mod assist;
pub mod auth;
pub mod config;
pub mod db;
pub mod filter;
pub mod kb;
pub mod store;
