use anyhow::{Result, bail};
use rusqlite::Connection;

/// Version stamped into SQLite's `user_version` after [`init_schema`] runs.
pub const SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS prompts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    project_name TEXT NOT NULL,
    session_id TEXT NOT NULL,
    timestamp DATETIME NOT NULL,
    count INTEGER DEFAULT 1,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL,
    total_prompts INTEGER DEFAULT 0,
    last_synced DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_prompts_project ON prompts(project_name);
CREATE INDEX IF NOT EXISTS idx_prompts_timestamp ON prompts(timestamp);

CREATE VIRTUAL TABLE IF NOT EXISTS prompts_fts USING fts5(content, project_name);
";

/// Apply pragmas and bring the schema up to date
///
/// Safe to run on every open: the DDL is `IF NOT EXISTS` throughout. Refuses
/// to touch a database stamped with a newer schema version than this build
/// understands.
pub(crate) fn init_schema(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "busy_timeout", 5000i32)?;

    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if current_version > SCHEMA_VERSION {
        bail!(
            "Database schema version {} is newer than this build supports ({})",
            current_version,
            SCHEMA_VERSION
        );
    }

    conn.execute_batch(SCHEMA_SQL)?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

    Ok(())
}
