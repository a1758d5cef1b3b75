use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use super::Database;
use crate::models::ProjectSummary;

impl Database {
    /// Overwrite a project's sync statistics
    ///
    /// The projects table is a summary of the latest sync run, not a ledger:
    /// each run replaces the row wholesale.
    pub fn replace_project_stats(
        &self,
        name: &str,
        total_prompts: i64,
        last_synced: DateTime<Utc>,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO projects (name, total_prompts, last_synced)
               VALUES (?1, ?2, ?3)",
            params![name, total_prompts, last_synced.to_rfc3339()],
        )?;
        Ok(())
    }

    /// All project summaries, alphabetical by name
    pub fn list_projects(&self) -> Result<Vec<ProjectSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, total_prompts, last_synced FROM projects ORDER BY name",
        )?;
        let rows = stmt.query_map([], row_to_summary)?;
        let projects = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }

    /// One project's summary, `None` if it never contributed a prompt
    pub fn project_summary(&self, name: &str) -> Result<Option<ProjectSummary>> {
        let summary = self
            .conn
            .query_row(
                "SELECT name, total_prompts, last_synced FROM projects WHERE name = ?1",
                params![name],
                row_to_summary,
            )
            .optional()?;
        Ok(summary)
    }
}

fn row_to_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProjectSummary> {
    let last_synced = DateTime::parse_from_rfc3339(&row.get::<_, String>(2)?)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
        .with_timezone(&Utc);
    Ok(ProjectSummary { name: row.get(0)?, total_prompts: row.get(1)?, last_synced })
}
