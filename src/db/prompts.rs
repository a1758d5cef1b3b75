use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use super::Database;
use crate::models::PromptRecord;

/// What [`Database::upsert_prompt`] did with an occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// First time this (content, project) pair was seen
    Inserted { id: i64 },
    /// Already archived; occurrence count bumped
    Incremented { id: i64, count: i64 },
}

impl Database {
    /// Insert a prompt occurrence or bump the count of the existing row
    ///
    /// Identity is the (content, project_name) pair. A repeat occurrence keeps
    /// the row's original session_id and created_at but takes the incoming
    /// timestamp, so `timestamp` always reflects the most recently seen use.
    /// The FTS mirror only gains a row on first insert, with its rowid pinned
    /// to the prompt id so searches can join back to the archive row.
    pub fn upsert_prompt(
        &self,
        content: &str,
        project_name: &str,
        session_id: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<UpsertOutcome> {
        let existing: Option<(i64, i64)> = self
            .conn
            .query_row(
                "SELECT id, count FROM prompts WHERE content = ?1 AND project_name = ?2",
                params![content, project_name],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        if let Some((id, count)) = existing {
            self.conn.execute(
                "UPDATE prompts SET count = count + 1, timestamp = ?1 WHERE id = ?2",
                params![timestamp.to_rfc3339(), id],
            )?;
            return Ok(UpsertOutcome::Incremented { id, count: count + 1 });
        }

        self.conn.execute(
            "INSERT INTO prompts (content, project_name, session_id, timestamp, count)
               VALUES (?1, ?2, ?3, ?4, 1)",
            params![content, project_name, session_id, timestamp.to_rfc3339()],
        )?;
        let id = self.conn.last_insert_rowid();

        self.conn.execute(
            "INSERT INTO prompts_fts (rowid, content, project_name) VALUES (?1, ?2, ?3)",
            params![id, content, project_name],
        )?;

        Ok(UpsertOutcome::Inserted { id })
    }

    /// Number of archived rows (unique prompts)
    pub fn prompt_count(&self) -> Result<i64> {
        let count = self.conn.query_row("SELECT COUNT(*) FROM prompts", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Occurrence count of one prompt, `None` if never archived
    pub fn occurrence_count(&self, content: &str, project_name: &str) -> Result<Option<i64>> {
        let count = self
            .conn
            .query_row(
                "SELECT count FROM prompts WHERE content = ?1 AND project_name = ?2",
                params![content, project_name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(count)
    }

    /// Most recently used prompts, newest first
    pub fn recent_prompts(&self, limit: usize) -> Result<Vec<PromptRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, content, project_name, session_id, timestamp, count
               FROM prompts ORDER BY timestamp DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], row_to_prompt)?;
        let prompts = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(prompts)
    }
}

/// Map a `SELECT id, content, project_name, session_id, timestamp, count` row
pub(crate) fn row_to_prompt(row: &rusqlite::Row<'_>) -> rusqlite::Result<PromptRecord> {
    let timestamp = DateTime::parse_from_rfc3339(&row.get::<_, String>(4)?)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
        .with_timezone(&Utc);
    Ok(PromptRecord {
        id: row.get(0)?,
        content: row.get(1)?,
        project_name: row.get(2)?,
        session_id: row.get(3)?,
        timestamp,
        count: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC3339 timestamp")
    }

    #[test]
    fn test_upsert_inserts_first_occurrence() {
        let db = Database::open_in_memory().unwrap();

        let outcome = db
            .upsert_prompt("fix the tests", "webapp", "session-1", ts("2024-01-15T10:30:00Z"))
            .unwrap();

        assert!(matches!(outcome, UpsertOutcome::Inserted { .. }));
        assert_eq!(db.prompt_count().unwrap(), 1);
        assert_eq!(db.occurrence_count("fix the tests", "webapp").unwrap(), Some(1));
    }

    #[test]
    fn test_upsert_increments_repeat_occurrences() {
        let db = Database::open_in_memory().unwrap();

        for _ in 0..5 {
            db.upsert_prompt("run it again", "webapp", "session-1", ts("2024-01-15T10:30:00Z"))
                .unwrap();
        }

        // Five occurrences, one row
        assert_eq!(db.prompt_count().unwrap(), 1);
        assert_eq!(db.occurrence_count("run it again", "webapp").unwrap(), Some(5));
    }

    #[test]
    fn test_upsert_identity_includes_project() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_prompt("same words", "webapp", "s1", ts("2024-01-15T10:30:00Z")).unwrap();
        db.upsert_prompt("same words", "cli", "s2", ts("2024-01-15T10:31:00Z")).unwrap();

        // Same content in different projects stays separate
        assert_eq!(db.prompt_count().unwrap(), 2);
        assert_eq!(db.occurrence_count("same words", "webapp").unwrap(), Some(1));
        assert_eq!(db.occurrence_count("same words", "cli").unwrap(), Some(1));
    }

    #[test]
    fn test_upsert_refreshes_timestamp() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_prompt("evolving", "webapp", "s1", ts("2024-01-15T10:30:00Z")).unwrap();
        db.upsert_prompt("evolving", "webapp", "s2", ts("2024-03-01T08:00:00Z")).unwrap();

        let prompts = db.recent_prompts(10).unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].timestamp, ts("2024-03-01T08:00:00Z"));
        // session_id stays from the first occurrence
        assert_eq!(prompts[0].session_id, "s1");
        assert_eq!(prompts[0].count, 2);
    }

    #[test]
    fn test_upsert_outcome_carries_running_count() {
        let db = Database::open_in_memory().unwrap();

        let first =
            db.upsert_prompt("hello", "webapp", "s1", ts("2024-01-15T10:30:00Z")).unwrap();
        let second =
            db.upsert_prompt("hello", "webapp", "s1", ts("2024-01-15T10:31:00Z")).unwrap();

        let UpsertOutcome::Inserted { id: first_id } = first else {
            panic!("expected insert, got {:?}", first);
        };
        assert_eq!(second, UpsertOutcome::Incremented { id: first_id, count: 2 });
    }

    #[test]
    fn test_fts_mirror_gets_one_row_per_prompt() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_prompt("searchable", "webapp", "s1", ts("2024-01-15T10:30:00Z")).unwrap();
        db.upsert_prompt("searchable", "webapp", "s1", ts("2024-01-15T10:31:00Z")).unwrap();
        db.upsert_prompt("another", "webapp", "s1", ts("2024-01-15T10:32:00Z")).unwrap();

        let fts_rows: i64 =
            db.conn.query_row("SELECT COUNT(*) FROM prompts_fts", [], |row| row.get(0)).unwrap();
        assert_eq!(fts_rows, 2);

        // FTS rowids line up with prompt ids
        let aligned: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM prompts_fts f JOIN prompts p ON p.id = f.rowid",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(aligned, 2);
    }

    #[test]
    fn test_recent_prompts_orders_newest_first() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_prompt("oldest", "webapp", "s1", ts("2024-01-01T00:00:00Z")).unwrap();
        db.upsert_prompt("newest", "webapp", "s1", ts("2024-03-01T00:00:00Z")).unwrap();
        db.upsert_prompt("middle", "webapp", "s1", ts("2024-02-01T00:00:00Z")).unwrap();

        let prompts = db.recent_prompts(2).unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].content, "newest");
        assert_eq!(prompts[1].content, "middle");
    }

    #[test]
    fn test_occurrence_count_unknown_prompt() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.occurrence_count("never seen", "webapp").unwrap(), None);
    }

    #[test]
    fn test_prompt_content_round_trips() {
        let db = Database::open_in_memory().unwrap();

        let content = "multi\nline\nprompt with unicode: héllo 🚀 and \"quotes\"";
        db.upsert_prompt(content, "webapp", "s1", ts("2024-01-15T10:30:00Z")).unwrap();

        let prompts = db.recent_prompts(1).unwrap();
        assert_eq!(prompts[0].content, content);
    }
}
