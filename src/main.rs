mod discover;
mod error;
mod parser;
mod record;
mod run;
mod settings;
mod sql;
mod time;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use settings::{Overrides, Settings};

#[derive(Parser)]
#[command(
    name = "class-notes-sql",
    about = "Generate class and tutor assignment SQL from markdown class notes"
)]
struct Cli {
    /// Directory holding one markdown note per class [default: notes/class-info]
    #[arg(long)]
    notes_dir: Option<PathBuf>,
    /// SQL file to (over)write [default: scripts/create_classes.sql]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Skip notes whose file name contains this text (repeatable) [default: .DS_Store, other]
    #[arg(short, long = "exclude", value_name = "MARKER")]
    exclude: Vec<String>,
    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let settings = Settings::load(&Overrides {
        notes_dir: cli.notes_dir,
        output: cli.output,
        exclude: cli.exclude,
    })?;
    info!(
        notes_dir = %settings.notes_dir.display(),
        output = %settings.output.display(),
        exclude = ?settings.exclude,
        "Settings resolved"
    );

    run::run(&settings, !cli.quiet)?;

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
