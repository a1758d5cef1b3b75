use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::LogRecord;

/// Parse a session JSONL file into its user records
/// Gracefully handles malformed lines by logging and skipping them
/// Returns an error if more than 50% of lines fail to parse or >100 consecutive errors
pub fn parse_session_file(path: &Path) -> Result<Vec<LogRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open session file: {}", path.display()))?;

    let reader = BufReader::new(file);
    let mut records = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;
    const MAX_CONSECUTIVE_ERRORS: usize = 100;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from session file")?;

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        total_lines += 1;

        // Pre-filter: only parse user records that carry a message payload.
        // Everything else (assistant, summary, system, file-history-snapshot)
        // is skipped without a warning.
        match serde_json::from_str::<serde_json::Value>(&line) {
            Ok(value) => {
                let is_user_message = value
                    .get("type")
                    .and_then(|t| t.as_str())
                    .map(|t| t == "user")
                    .unwrap_or(false)
                    && value.get("message").is_some();

                if is_user_message {
                    // Attempt to parse as LogRecord
                    match serde_json::from_value::<LogRecord>(value) {
                        Ok(record) => {
                            records.push(record);
                            consecutive_errors = 0; // Reset on success
                        }
                        Err(e) => {
                            eprintln!(
                                "Warning: Failed to parse line {} in {}: {}",
                                line_num + 1,
                                path.display(),
                                e
                            );
                            skipped_count += 1;
                            consecutive_errors += 1;

                            // Bail if too many consecutive errors
                            if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                                bail!(
                                    "Too many consecutive parse errors ({}) in {} - file may be corrupted",
                                    consecutive_errors,
                                    path.display()
                                );
                            }
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse JSON on line {} in {}: {}",
                    line_num + 1,
                    path.display(),
                    e
                );
                skipped_count += 1;
                consecutive_errors += 1;

                // Bail if too many consecutive errors
                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in {} - file may be corrupted",
                        consecutive_errors,
                        path.display()
                    );
                }
            }
        }
    }

    // Check if failure rate is too high
    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in {}: {} of {} lines failed ({:.1}%)",
                path.display(),
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        eprintln!(
            "Parsed {}: {} records ({} skipped)",
            path.display(),
            records.len(),
            skipped_count
        );
    }

    Ok(records)
}
