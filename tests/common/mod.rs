//! Shared test utilities for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create the projects/ directory without any project subdirectories
    pub fn with_empty_projects_dir(self) -> Self {
        let projects_dir = self.temp_dir.path().join("projects");
        fs::create_dir_all(&projects_dir).expect("Failed to create projects dir");
        self
    }

    /// Add a project directory with the given name and session files
    pub fn with_project(self, dir_name: &str, session_files: &[SessionFileBuilder]) -> Self {
        let projects_dir = self.temp_dir.path().join("projects");
        fs::create_dir_all(&projects_dir).expect("Failed to create projects dir");

        let project_dir = projects_dir.join(dir_name);
        fs::create_dir(&project_dir).expect("Failed to create project dir");

        for session_file in session_files {
            session_file.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for session JSONL files
pub struct SessionFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a new session file with the given filename
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    /// Append a structured log record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Append a raw line verbatim (for malformed input)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        let file_path = dir.join(&self.filename);
        fs::write(file_path, self.lines.join("\n")).expect("Failed to write session file");
    }
}

/// Builder for session log records
pub struct RecordBuilder {
    record_type: String,
    content: Value,
    timestamp: Option<Value>,
}

impl RecordBuilder {
    /// Create a user record with a plain-string prompt
    pub fn user(content: &str) -> Self {
        Self {
            record_type: "user".to_string(),
            content: Value::String(content.to_string()),
            timestamp: Some(json!("2024-01-15T10:30:00Z")),
        }
    }

    /// Create an assistant record with a text content block
    pub fn assistant(text: &str) -> Self {
        Self {
            record_type: "assistant".to_string(),
            content: json!([{"type": "text", "text": text}]),
            timestamp: Some(json!("2024-01-15T10:30:05Z")),
        }
    }

    /// Replace the message content with an arbitrary JSON value
    /// (content-block arrays, tool results, etc.)
    pub fn content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    /// Set an RFC 3339 timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(json!(timestamp));
        self
    }

    /// Set a Unix-milliseconds timestamp
    pub fn timestamp_millis(mut self, millis: i64) -> Self {
        self.timestamp = Some(json!(millis));
        self
    }

    /// Drop the timestamp field entirely
    pub fn no_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    /// Convert to a JSONL line
    pub fn to_json(&self) -> String {
        let mut record = json!({
            "type": self.record_type,
            "message": {"role": self.record_type, "content": self.content},
        });
        if let Some(timestamp) = &self.timestamp {
            record["timestamp"] = timestamp.clone();
        }
        record.to_string()
    }
}

/// Helper to create a minimal valid .claude directory: one project, one
/// session file, two prompts
pub fn minimal_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_project(
            "-Users-jane-code-webapp",
            &[SessionFileBuilder::new("session-1.jsonl")
                .with_record(RecordBuilder::user("Fix the login bug"))
                .with_record(RecordBuilder::assistant("Looking into it"))
                .with_record(
                    RecordBuilder::user("Add a regression test")
                        .timestamp("2024-01-15T10:35:00Z"),
                )],
        )
        .build()
}
