//! Data models for Claude Code conversation logs and the prompt archive.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`LogRecord`] - A single parsed line of a session log file
//! - [`ProjectLogs`] - A discovered project directory and its session files
//! - [`ExtractedPrompt`] - One user-authored prompt pulled from a log
//! - [`PromptRecord`] / [`ProjectSummary`] / [`PromptMatch`] - Database rows
//!
//! Records use serde for JSON deserialization with a custom timestamp
//! deserializer in the `parsers::deserializers` module.

pub mod project;
pub mod prompt;
pub mod record;

pub use project::ProjectLogs;
pub use prompt::{ExtractedPrompt, ProjectSummary, PromptMatch, PromptRecord};
pub use record::{LogRecord, RecordMessage};
