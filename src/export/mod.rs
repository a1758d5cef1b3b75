//! Plain-text export of user prompts, one file per project

pub mod text;

pub use text::{ExportReport, ProjectExport, export_prompts};
