//! AI Prompt Archive - Extract, export, and search Claude Code prompts
//!
//! This library works on Claude Code's local conversation logs stored under
//! `~/.claude/projects/`, one directory per project with one JSONL file per
//! session. It supports:
//!
//! - Discovering projects and parsing their session logs
//! - Extracting user-authored prompts (and nothing else) from the records
//! - Exporting prompts to per-project text files
//! - Archiving prompts into a SQLite database with occurrence counting and
//!   full-text search
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use ai_prompt_archive::db::{Database, sync_prompts};
//!
//! let claude_dir = PathBuf::from("/Users/alice/.claude");
//! let db = Database::open(&PathBuf::from("prompts.db"))?;
//! let report = sync_prompts(&claude_dir, &db)?;
//! println!("Archived {} prompts", report.total_prompts);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod db;
pub mod export;
pub mod models;
pub mod parsers;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use db::{Database, SyncReport, sync_prompts};
pub use export::{ExportReport, export_prompts};
pub use models::{ExtractedPrompt, LogRecord, ProjectLogs, PromptMatch, PromptRecord};
pub use scanner::{collect_project_prompts, discover_projects};
pub use utils::paths::{format_path_with_tilde, project_display_name};
