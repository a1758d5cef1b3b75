use std::path::PathBuf;

/// A discovered project log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLogs {
    /// Raw directory name under `projects/`.
    pub dir_name: String,
    /// Human-facing name derived from the directory naming convention.
    pub display_name: String,
    pub project_dir: PathBuf,
    /// Immediate `*.jsonl` session files, sorted by name.
    pub session_files: Vec<PathBuf>,
}
