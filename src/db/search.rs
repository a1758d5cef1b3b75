use anyhow::Result;
use rusqlite::params;

use super::Database;
use super::prompts::row_to_prompt;
use crate::models::PromptMatch;

/// Build FTS5 query from whitespace-separated words
/// Each word becomes a quoted prefix match, joined with AND
pub(crate) fn build_fts_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| format!("\"{}\"*", word.replace('"', "")))
        .collect::<Vec<_>>()
        .join(" AND ")
}

impl Database {
    /// Full-text search over archived prompts
    ///
    /// Every whitespace-separated word of `query` must match as a prefix
    /// somewhere in the prompt content or project name. Results come back
    /// best-first by bm25 relevance, at most `limit` of them, optionally
    /// restricted to one project. A blank query matches nothing.
    pub fn search_prompts(
        &self,
        query: &str,
        project: Option<&str>,
        limit: usize,
    ) -> Result<Vec<PromptMatch>> {
        let fts_query = build_fts_query(query);
        if fts_query.is_empty() {
            return Ok(Vec::new());
        }

        let map_match = |row: &rusqlite::Row<'_>| -> rusqlite::Result<PromptMatch> {
            Ok(PromptMatch { prompt: row_to_prompt(row)?, score: row.get(6)? })
        };

        let matches = if let Some(project) = project {
            let mut stmt = self.conn.prepare(
                "SELECT p.id, p.content, p.project_name, p.session_id, p.timestamp, p.count,
                        bm25(prompts_fts) AS score
                   FROM prompts_fts f
                   JOIN prompts p ON p.id = f.rowid
                  WHERE prompts_fts MATCH ?1 AND p.project_name = ?2
                  ORDER BY score
                  LIMIT ?3",
            )?;
            let rows = stmt.query_map(params![fts_query, project, limit], map_match)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        } else {
            let mut stmt = self.conn.prepare(
                "SELECT p.id, p.content, p.project_name, p.session_id, p.timestamp, p.count,
                        bm25(prompts_fts) AS score
                   FROM prompts_fts f
                   JOIN prompts p ON p.id = f.rowid
                  WHERE prompts_fts MATCH ?1
                  ORDER BY score
                  LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![fts_query, limit], map_match)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        Ok(matches)
    }
}
