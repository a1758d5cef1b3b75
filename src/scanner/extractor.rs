use crate::models::{ExtractedPrompt, ProjectLogs};
use crate::parsers::parse_session_file;

/// Collect every user prompt recorded in a project's session files
///
/// Walks the project's session files in order and pulls out the trimmed text
/// of each user record that carries plain string content. Records without
/// prompt text (tool results, block content) contribute nothing.
///
/// Session files that fail to parse are logged as warnings and skipped, so a
/// single corrupted log cannot hide the rest of the project's history.
pub fn collect_project_prompts(project: &ProjectLogs) -> Vec<ExtractedPrompt> {
    let mut prompts = Vec::new();

    for session_file in &project.session_files {
        // The session id is the file stem, e.g. 0a1b2c3d.jsonl -> 0a1b2c3d
        let session_id = session_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();

        match parse_session_file(session_file) {
            Ok(records) => {
                for record in records {
                    if let Some(text) = record.prompt_text() {
                        prompts.push(ExtractedPrompt {
                            content: text.to_string(),
                            session_id: session_id.clone(),
                            timestamp: record.timestamp,
                        });
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse session file {}: {}",
                    session_file.display(),
                    e
                );
            }
        }
    }

    prompts
}
