//! SQLite archive of user prompts
//!
//! One `prompts` row per unique (content, project) pair with an occurrence
//! count, a `projects` summary table refreshed on every sync, and a
//! `prompts_fts` FTS5 mirror whose rowids are pinned to prompt ids so search
//! results join straight back to archive rows.
//!
//! The connection runs in WAL mode with a busy timeout, and the schema is
//! stamped into SQLite's `user_version` so a newer archive is refused rather
//! than silently mangled.

mod projects;
mod prompts;
mod schema;
mod search;
mod sync;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub use prompts::UpsertOutcome;
pub use schema::SCHEMA_VERSION;
pub use sync::{ProjectSync, SyncReport, sync_prompts};

/// Handle to the prompt archive database
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the archive at `path` and bring its schema up to date
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        schema::init_schema(&conn)
            .with_context(|| format!("Failed to initialize database: {}", path.display()))?;
        Ok(Self { conn })
    }

    /// Open a fresh in-memory archive (mainly for tests)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }
}
