//! Scanning Claude Code project logs for user prompts
//!
//! # Error Handling Strategy
//!
//! The scanner combines graceful degradation with hard failures only where the
//! whole operation is meaningless:
//!
//! - **Missing projects directory**: Not an error. [`discover_projects`] returns
//!   an empty list and callers decide what to tell the user.
//!
//! - **Per-project and per-file failures**: An unreadable project directory or a
//!   session file that fails to parse is logged as a warning and skipped, so one
//!   bad entry never hides the rest of the history.
//!
//! - **Deterministic enumeration**: Projects are sorted by directory name and
//!   session files by path, so repeated runs visit everything in the same order
//!   and produce identical output.
//!
//! - **Parser integration**: Line-level error handling is delegated to the
//!   parser, which applies its own failure rate checks.

pub mod extractor;
pub mod project_discovery;

pub use extractor::collect_project_prompts;
pub use project_discovery::discover_projects;
