//! rollnote - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rollnote::changelog::{read_changelog, write_changelog, write_notes};
use rollnote::error::ReleaseError;
use rollnote::release::{extract_notes, release_date, roll_release};

/// Kind of release being cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Pre-release: print the pending Unreleased notes, leave the file alone
    Alpha,
    /// Pre-release: same behavior as alpha
    Beta,
    /// Full release: roll Unreleased notes into a versioned section
    Release,
}

/// Extract and promote Unreleased changelog notes for release automation.
#[derive(Parser, Debug)]
#[command(name = "rollnote")]
#[command(about = "Extract and promote Unreleased changelog notes")]
#[command(version)]
struct Cli {
    /// Release kind
    #[arg(value_enum)]
    mode: Mode,

    /// Path to the changelog file
    #[arg(long, default_value = "CHANGELOG.md")]
    file: PathBuf,

    /// Version for the new section (required in release mode)
    #[arg(long)]
    version: Option<String>,

    /// Write the notes to this path instead of stdout
    #[arg(long)]
    notes_output: Option<PathBuf>,

    /// Release mode: save the updated changelog back to --file
    #[arg(long)]
    update_file: bool,

    /// Release mode: release date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<String>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut changelog = read_changelog(&cli.file)
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;

    let notes = match cli.mode {
        Mode::Alpha | Mode::Beta => extract_notes(&changelog)?,
        Mode::Release => {
            let version = cli.version.as_deref().ok_or(ReleaseError::MissingVersion)?;
            let date = release_date(cli.date.as_deref())?;

            let notes = roll_release(&mut changelog, version, &date)?;

            if cli.update_file {
                write_changelog(&cli.file, &changelog)
                    .with_context(|| format!("Failed to update {}", cli.file.display()))?;
            }

            notes
        }
    };

    match &cli.notes_output {
        Some(path) => write_notes(path, &notes)
            .with_context(|| format!("Failed to write notes to {}", path.display()))?,
        None => println!("{notes}"),
    }

    Ok(())
}
