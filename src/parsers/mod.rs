//! JSONL parsers for Claude Code session files
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: Malformed JSON lines are logged to stderr and skipped,
//!   allowing parsing to continue. This prevents a single bad line from losing an entire
//!   session's prompts.
//!
//! - **Catastrophic failure detection**: If >50% of lines fail to parse, or if >100 consecutive
//!   errors occur, the parser returns an error. This prevents accepting severely corrupted files.
//!
//! - **User feedback**: Summary statistics are printed showing successful records, warnings, and
//!   failures, giving users visibility into parse quality.
//!
//! - **Error propagation**: Uses `anyhow::Result` for error handling with context. Since this is
//!   a binary/CLI tool (not a library), errors are boxed and consumers don't match on error types.
//!
//! This strategy balances robustness (tolerating minor corruption) with safety (rejecting
//! fundamentally broken files).

pub mod deserializers;
pub mod session;

pub use session::parse_session_file;
