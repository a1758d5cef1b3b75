use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One line of a session log file.
///
/// Only the fields the archive cares about are modeled; every other field in
/// the record is ignored by deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub message: RecordMessage,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_opt_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordMessage {
    /// Either a plain string (a typed prompt) or an array of content blocks
    /// (tool results, images). Anything that is not a string is not a prompt.
    #[serde(default)]
    pub content: Value,
}

impl LogRecord {
    /// The user-authored text, trimmed, if the message content is a
    /// non-empty string.
    pub fn prompt_text(&self) -> Option<&str> {
        let text = self.message.content.as_str()?.trim();
        (!text.is_empty()).then_some(text)
    }
}
