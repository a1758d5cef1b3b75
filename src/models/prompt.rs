use chrono::{DateTime, Utc};

/// One user-authored prompt pulled out of a session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPrompt {
    pub content: String,
    pub session_id: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// A stored prompt row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRecord {
    pub id: i64,
    pub content: String,
    pub project_name: String,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub count: i64,
}

/// A stored project summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: String,
    pub total_prompts: i64,
    pub last_synced: DateTime<Utc>,
}

/// A full-text search hit: the stored row plus its relevance score
/// (lower is better, straight from bm25).
#[derive(Debug, Clone)]
pub struct PromptMatch {
    pub prompt: PromptRecord,
    pub score: f64,
}
