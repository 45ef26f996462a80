//! Per-directory processing pipeline
//!
//! Discovers the `.html` files in the source directory, dispatches one
//! future per file (read, parse, embed, serialize, write), and joins on all
//! of them. The join point is the completion signal: there are no shared
//! counters, and the zero-files case is its own terminal state announced
//! before anything is dispatched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use futures::future::join_all;
use kuchiki::traits::TendrilSink;

use crate::config::EmbedConfig;
use crate::embed::{self, EmbedReport};

/// Aggregate outcome of one run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Files discovered in the source directory
    pub queued: usize,
    /// Files written to the output directory
    pub completed: usize,
    /// Resources inlined across all files
    pub embedded: usize,
    /// Resources left un-embedded because their file was missing
    pub skipped: usize,
}

/// List the `.html` files (case-insensitive extension) directly inside
/// `source_dir`. Subdirectories are not recursed into.
pub fn discover_html_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(source_dir)
        .with_context(|| format!("cannot read source directory {}", source_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("failed to read directory entry")?;
        let path = entry.path();
        let is_html = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
        if is_html && path.is_file() {
            files.push(path);
        }
    }
    // Stable dispatch order; completion order is unconstrained.
    files.sort();
    Ok(files)
}

/// Process every discovered file and return the run summary.
///
/// Any fatal error (unreadable input, write failure, attempted external
/// fetch) aborts the whole run; missing referenced resources only produce
/// warnings and count as skips.
pub async fn run(config: &EmbedConfig) -> Result<RunSummary> {
    let files = discover_html_files(&config.source_dir)?;
    if files.is_empty() {
        println!(
            "{}",
            format!(
                "did not find any .html files in {}",
                config.source_dir.display()
            )
            .yellow()
        );
        return Ok(RunSummary::default());
    }

    match tokio::fs::create_dir(&config.output_dir).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
        Err(e) => {
            return Err(anyhow!(e).context(format!(
                "failed to create output directory {}",
                config.output_dir.display()
            )));
        }
    }

    let queued = files.len();
    let futures = files.iter().map(|path| process_file(path, config));
    let results = join_all(futures).await;

    let mut summary = RunSummary {
        queued,
        ..RunSummary::default()
    };
    for result in results {
        let report = result?;
        summary.completed += 1;
        summary.embedded += report.embedded;
        summary.skipped += report.skipped.len();
    }

    println!(
        "{}",
        format!("{} of {} files processed", summary.completed, summary.queued).green()
    );
    Ok(summary)
}

/// Read, parse, embed, serialize and write a single file
async fn process_file(path: &Path, config: &EmbedConfig) -> Result<EmbedReport> {
    let html = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let document = kuchiki::parse_html().one(html);
    if config.minify {
        embed::collapse_whitespace(&document);
    }

    let report = embed::embed_resources(&document, &config.source_dir, config)?;
    let output = embed::serialize(&document)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("input path {} has no file name", path.display()))?;
    let output_path = config.output_dir.join(file_name);
    tokio::fs::write(&output_path, output)
        .await
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    if config.verbose {
        println!("{} {}", "✔".green(), output_path.display());
    }
    Ok(report)
}
