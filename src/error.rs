//! Error types for rollnote modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from changelog parsing and writing.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Changelog file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("No section headers (## [...]) found in changelog")]
    NoSections,

    #[error("No [{0}] section found in changelog")]
    SectionNotFound(String),

    #[error("Failed to create backup: {0}")]
    BackupFailed(#[source] std::io::Error),

    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to write release notes: {0}")]
    NotesWriteFailed(#[source] std::io::Error),
}

/// Errors from release operations.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("--version is required in release mode")]
    MissingVersion,

    #[error("Invalid release date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}
