use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use super::{Database, UpsertOutcome};
use crate::scanner::{collect_project_prompts, discover_projects};

/// Per-project outcome of a sync run
#[derive(Debug, Clone)]
pub struct ProjectSync {
    /// Project display name
    pub project: String,
    /// Occurrences archived for this project (inserts plus count bumps)
    pub prompt_count: usize,
}

/// Outcome of a full sync run
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Projects that contributed at least one prompt, in first-seen order
    pub projects: Vec<ProjectSync>,
    /// Total occurrences processed
    pub total_prompts: usize,
    /// Rows newly inserted
    pub new_prompts: usize,
    /// Occurrences that bumped an existing row
    pub duplicate_prompts: usize,
    /// Prompts skipped because their record carried no timestamp
    pub missing_timestamp: usize,
}

/// Archive every project's prompts into the database
///
/// Walks all discovered projects and upserts each prompt occurrence under the
/// project's display name. Directories that strip down to the same display
/// name are one logical project in the archive, so their occurrence totals
/// aggregate. Prompts without a timestamp cannot take a place in the
/// archive's timeline and are skipped, tallied in the report.
///
/// Project statistics are replaced wholesale at the end of the run, stamped
/// with a single sync time.
pub fn sync_prompts(claude_dir: &Path, db: &Database) -> Result<SyncReport> {
    let projects = discover_projects(claude_dir)?;

    let mut report = SyncReport::default();
    let mut totals: Vec<ProjectSync> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for project in &projects {
        let prompts = collect_project_prompts(project);
        let mut processed = 0usize;

        for prompt in &prompts {
            let Some(timestamp) = prompt.timestamp else {
                report.missing_timestamp += 1;
                continue;
            };

            let outcome = db.upsert_prompt(
                &prompt.content,
                &project.display_name,
                &prompt.session_id,
                timestamp,
            )?;
            match outcome {
                UpsertOutcome::Inserted { .. } => report.new_prompts += 1,
                UpsertOutcome::Incremented { .. } => report.duplicate_prompts += 1,
            }
            processed += 1;
        }

        if processed > 0 {
            report.total_prompts += processed;
            match index_by_name.get(&project.display_name) {
                Some(&i) => totals[i].prompt_count += processed,
                None => {
                    index_by_name.insert(project.display_name.clone(), totals.len());
                    totals.push(ProjectSync {
                        project: project.display_name.clone(),
                        prompt_count: processed,
                    });
                }
            }
        }
    }

    let synced_at = Utc::now();
    for entry in &totals {
        db.replace_project_stats(&entry.project, entry.prompt_count as i64, synced_at)?;
    }

    report.projects = totals;
    Ok(report)
}
