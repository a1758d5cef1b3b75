use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::db::{Database, sync_prompts};
use crate::export::export_prompts;
use crate::scanner::{collect_project_prompts, discover_projects};
use crate::utils::{default_claude_dir, format_path_with_tilde, snippet};

#[derive(Parser)]
#[command(name = "ai-prompt-archive")]
#[command(version = "0.1.0")]
#[command(about = "Archive and search your Claude Code prompts", long_about = None)]
pub struct Cli {
    /// Claude data directory (defaults to ~/.claude)
    #[arg(long, global = true, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export prompts to per-project text files
    Export {
        /// Directory to write the text files into
        #[arg(long, default_value = "prompt_exports", value_name = "DIR")]
        output_dir: PathBuf,
    },
    /// Archive prompts into a SQLite database with deduplication
    Sync {
        /// Database file to sync into
        #[arg(long, default_value = "prompts.db", value_name = "FILE")]
        db_path: PathBuf,
    },
    /// Full-text search the archived prompts
    Search {
        /// Words to look for (prefix match, all must appear)
        query: String,
        /// Database file to search
        #[arg(long, default_value = "prompts.db", value_name = "FILE")]
        db_path: PathBuf,
        /// Restrict matches to one project
        #[arg(long, value_name = "NAME")]
        project: Option<String>,
        /// Maximum number of matches to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show statistics about the recorded history
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Export { output_dir }) => {
            let claude_dir = resolve_claude_dir(&cli)?;
            run_export(&claude_dir, output_dir)
        }
        Some(Commands::Sync { db_path }) => {
            let claude_dir = resolve_claude_dir(&cli)?;
            run_sync(&claude_dir, db_path)
        }
        Some(Commands::Search { query, db_path, project, limit }) => {
            run_search(query, db_path, project.as_deref(), *limit)
        }
        Some(Commands::Stats) => {
            let claude_dir = resolve_claude_dir(&cli)?;
            show_stats(&claude_dir)
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn resolve_claude_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.claude_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_claude_dir(),
    }
}

/// Commands that read the logs bow out politely when there are none at all
fn projects_dir_missing(claude_dir: &Path) -> bool {
    if claude_dir.join("projects").exists() {
        return false;
    }
    println!(
        "Claude projects directory not found at {}/",
        format_path_with_tilde(&claude_dir.join("projects"))
    );
    true
}

fn run_export(claude_dir: &Path, output_dir: &Path) -> Result<()> {
    if projects_dir_missing(claude_dir) {
        return Ok(());
    }

    let report = export_prompts(claude_dir, output_dir)?;

    for entry in &report.projects {
        match &entry.file_name {
            Some(file_name) => {
                println!("Exported {} prompts to {}", entry.prompt_count, file_name);
            }
            None => {
                println!("No prompts found for {}", entry.project);
            }
        }
    }

    println!();
    println!("Total: {} prompts exported to {}/", report.total_prompts, output_dir.display());

    Ok(())
}

fn run_sync(claude_dir: &Path, db_path: &Path) -> Result<()> {
    if projects_dir_missing(claude_dir) {
        return Ok(());
    }

    let db = Database::open(db_path)?;
    let report = sync_prompts(claude_dir, &db)?;

    for entry in &report.projects {
        println!("{}: {} prompts", entry.project, entry.prompt_count);
    }

    if report.missing_timestamp > 0 {
        eprintln!("Warning: Skipped {} prompts without timestamps", report.missing_timestamp);
    }

    println!();
    println!("Total: {} prompts processed", report.total_prompts);
    println!("Database saved to: {}", db_path.display());

    Ok(())
}

fn run_search(query: &str, db_path: &Path, project: Option<&str>, limit: usize) -> Result<()> {
    if !db_path.exists() {
        bail!("Database not found at {} - run `ai-prompt-archive sync` first", db_path.display());
    }

    let db = Database::open(db_path)?;
    let matches = db.search_prompts(query, project, limit)?;

    if matches.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }

    for entry in &matches {
        let prompt = &entry.prompt;
        println!(
            "[{}] {} (x{}) {}",
            prompt.timestamp.format("%Y-%m-%d %H:%M"),
            prompt.project_name,
            prompt.count,
            snippet(&prompt.content, 100)
        );
    }

    Ok(())
}

fn show_stats(claude_dir: &Path) -> Result<()> {
    if projects_dir_missing(claude_dir) {
        return Ok(());
    }

    let projects = discover_projects(claude_dir)?;

    let mut total_files = 0;
    let mut total_prompts = 0;
    let mut unique_prompts: HashSet<(String, String)> = HashSet::new();
    let mut per_project: BTreeMap<String, usize> = BTreeMap::new();
    let mut oldest: Option<DateTime<Utc>> = None;
    let mut newest: Option<DateTime<Utc>> = None;

    for project in &projects {
        total_files += project.session_files.len();

        let prompts = collect_project_prompts(project);
        total_prompts += prompts.len();
        if !prompts.is_empty() {
            *per_project.entry(project.display_name.clone()).or_insert(0) += prompts.len();
        }

        for prompt in prompts {
            if let Some(ts) = prompt.timestamp {
                oldest = Some(oldest.map_or(ts, |o| o.min(ts)));
                newest = Some(newest.map_or(ts, |n| n.max(ts)));
            }
            unique_prompts.insert((project.display_name.clone(), prompt.content));
        }
    }

    println!("Claude Code Prompt Statistics");
    println!("================================");
    println!("Projects: {}", projects.len());
    println!("Session files: {}", total_files);
    println!("Prompts: {}", total_prompts);
    println!("  Unique: {}", unique_prompts.len());
    println!();

    for (name, count) in &per_project {
        println!("  {}: {} prompts", name, count);
    }
    if !per_project.is_empty() {
        println!();
    }

    println!("Claude directory: {}", format_path_with_tilde(claude_dir));

    if let Some(oldest) = oldest {
        println!("Oldest prompt: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = newest {
        println!("Newest prompt: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
