use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ProjectLogs;
use crate::utils::project_display_name;

/// Discover all projects under the Claude projects directory
///
/// Scans `<claude_dir>/projects/` for project subdirectories, deriving each
/// one's display name from the directory name and collecting its `*.jsonl`
/// session files.
///
/// # Arguments
///
/// * `claude_dir` - Path to the ~/.claude directory
///
/// # Returns
///
/// Returns a Vec of [`ProjectLogs`] sorted by directory name, each with its
/// session files sorted by path, so repeated runs enumerate identically.
/// Returns an empty Vec if the projects directory doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if the projects directory exists but cannot be read, or a
/// directory entry cannot be accessed.
///
/// Individual project directories with read errors are logged as warnings and
/// skipped (graceful degradation).
pub fn discover_projects(claude_dir: &Path) -> Result<Vec<ProjectLogs>> {
    let projects_dir = claude_dir.join("projects");

    // Return empty vec if projects directory doesn't exist
    if !projects_dir.exists() {
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();

    // Iterate through all entries in the projects directory
    let entries = fs::read_dir(&projects_dir)
        .context(format!("Failed to read projects directory: {}", projects_dir.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        // Skip if not a directory
        if !path.is_dir() {
            continue;
        }

        // Get the directory name (flattened project path)
        let dir_name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        let display_name = project_display_name(&dir_name);

        // Find all *.jsonl session files in this project directory
        let mut session_files = Vec::new();
        match fs::read_dir(&path) {
            Ok(files) => {
                for file in files.flatten() {
                    let file_path = file.path();
                    let is_jsonl =
                        file_path.extension().map(|ext| ext == "jsonl").unwrap_or(false);
                    if is_jsonl && file_path.is_file() {
                        session_files.push(file_path);
                    }
                }
            }
            Err(e) => {
                eprintln!("Warning: Failed to read project directory {}: {}", path.display(), e);
                continue;
            }
        }

        // Directory read order is platform-dependent
        session_files.sort();

        projects.push(ProjectLogs { dir_name, display_name, project_dir: path, session_files });
    }

    projects.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));

    Ok(projects)
}
