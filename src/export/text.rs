use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::scanner::{collect_project_prompts, discover_projects};

/// Outcome of exporting a single project
#[derive(Debug, Clone)]
pub struct ProjectExport {
    /// Project display name
    pub project: String,
    /// File written under the output directory, `None` when the project had
    /// no prompts and nothing was written
    pub file_name: Option<String>,
    /// Number of prompts written
    pub prompt_count: usize,
}

/// Outcome of a full export run, one entry per discovered project
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub projects: Vec<ProjectExport>,
    pub total_prompts: usize,
}

/// Export every project's prompts to per-project text files
///
/// Creates `output_dir` if needed and writes one `<project>.txt` file per
/// project that has prompts, each prompt followed by a blank line. Projects
/// sharing a display name get numbered files (`name.txt`, `name2.txt`, ...)
/// in directory-name order. A project with no prompts writes no file but
/// still consumes its number, so file names stay stable as projects fill up.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or a file
/// cannot be written. Unparseable session files are warned about and skipped
/// by the scanner, not treated as errors here.
pub fn export_prompts(claude_dir: &Path, output_dir: &Path) -> Result<ExportReport> {
    let projects = discover_projects(claude_dir)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let mut name_counts: HashMap<String, usize> = HashMap::new();
    let mut report = ExportReport { projects: Vec::new(), total_prompts: 0 };

    for project in &projects {
        // Number duplicates by order of appearance; the first keeps the bare name
        let occurrence =
            name_counts.entry(project.display_name.clone()).and_modify(|c| *c += 1).or_insert(1);
        let file_name = if *occurrence > 1 {
            format!("{}{}.txt", project.display_name, occurrence)
        } else {
            format!("{}.txt", project.display_name)
        };

        let prompts = collect_project_prompts(project);

        if prompts.is_empty() {
            report.projects.push(ProjectExport {
                project: project.display_name.clone(),
                file_name: None,
                prompt_count: 0,
            });
            continue;
        }

        let capacity: usize = prompts.iter().map(|p| p.content.len() + 2).sum();
        let mut contents = String::with_capacity(capacity);
        for prompt in &prompts {
            contents.push_str(&prompt.content);
            contents.push_str("\n\n");
        }

        let output_path = output_dir.join(&file_name);
        fs::write(&output_path, contents)
            .with_context(|| format!("Failed to write export file: {}", output_path.display()))?;

        report.total_prompts += prompts.len();
        report.projects.push(ProjectExport {
            project: project.display_name.clone(),
            file_name: Some(file_name),
            prompt_count: prompts.len(),
        });
    }

    Ok(report)
}
