use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::discover::discover_class_files;
use crate::parser;
use crate::settings::Settings;
use crate::sql;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Notes picked up by discovery, parsed or not.
    pub considered: usize,
    pub generated: usize,
    pub failed: usize,
    pub tutor_assignments: usize,
}

impl RunSummary {
    pub fn message(&self) -> String {
        format!("Generated SQL for {} classes", self.considered)
    }

    pub fn print(&self) {
        println!("{}", self.message());
    }
}

fn processing_message(path: &Path) -> String {
    format!("Processing {}...", path.display())
}

fn failure_message(path: &Path) -> String {
    format!("Failed to extract information from {}", path.display())
}

/// Convert every class note under `settings.notes_dir` and write one SQL file.
///
/// A note that fails to parse is reported and skipped. Only an unreadable
/// notes directory or an unwritable output aborts the run.
pub fn run(settings: &Settings, show_progress: bool) -> Result<RunSummary> {
    let files = discover_class_files(&settings.notes_dir, &settings.exclude)?;

    let pb = if show_progress {
        ProgressBar::new(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    let (all_sql, mut summary) = build_sql(&files, &pb);
    pb.finish_and_clear();

    write_output(&settings.output, &all_sql)?;
    info!(
        output = %settings.output.display(),
        generated = summary.generated,
        failed = summary.failed,
        tutors = summary.tutor_assignments,
        "SQL written"
    );

    summary.considered = files.len();
    summary.print();
    Ok(summary)
}

fn build_sql(files: &[PathBuf], pb: &ProgressBar) -> (String, RunSummary) {
    let mut all_sql = String::from(sql::SQL_HEADER);
    let mut summary = RunSummary::default();

    for path in files {
        pb.suspend(|| println!("{}", processing_message(path)));

        match parser::extract_class_info(path) {
            Ok(record) => {
                debug!(class = %record.class_id, tutors = record.tutors.len(), "extracted");
                all_sql.push_str(&sql::class_header(&record));
                all_sql.push_str(&sql::class_sql(&record));
                summary.generated += 1;
                summary.tutor_assignments += record.tutors.len();
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping note");
                pb.suspend(|| println!("{}", failure_message(path)));
                summary.failed += 1;
            }
        }
        pb.inc(1);
    }

    (all_sql, summary)
}

fn write_output(output: &Path, sql: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(output, sql).with_context(|| format!("Failed to write {}", output.display()))
}
