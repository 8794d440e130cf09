//! Rebuild changelog text and persist it to disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::changelog::format::Changelog;
use crate::error::ChangelogError;

/// Reconstruct document text from a parsed changelog.
///
/// The prefix and each `header + body` section are joined with exactly one
/// blank line, and the document ends with exactly one newline. Trailing
/// blank lines inside bodies are dropped, so output is normalized rather
/// than byte-identical to arbitrary hand-written input.
pub fn rebuild(changelog: &Changelog) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !changelog.prefix.trim().is_empty() {
        parts.push(changelog.prefix.trim_end().to_string());
    }

    for section in &changelog.sections {
        let body = section.body.trim_end();
        if body.is_empty() {
            parts.push(section.header.clone());
        } else {
            parts.push(format!("{}\n{}", section.header, body));
        }
    }

    let mut text = parts.join("\n\n");
    text.push('\n');
    text
}

/// Rebuild the changelog and persist it back to `path`.
///
/// An existing file is first copied to `<path>.bak` (e.g. `CHANGELOG.md.bak`).
pub fn write_changelog(path: &Path, changelog: &Changelog) -> Result<(), ChangelogError> {
    if path.exists() {
        let backup_path = path.with_extension("md.bak");
        std::fs::copy(path, &backup_path).map_err(ChangelogError::BackupFailed)?;
    }

    write_atomic(path, &rebuild(changelog)).map_err(ChangelogError::WriteFailed)?;

    debug!("updated changelog at {}", path.display());
    Ok(())
}

/// Write release notes to `path` with exactly one trailing newline.
pub fn write_notes(path: &Path, notes: &str) -> Result<(), ChangelogError> {
    let mut content = notes.trim_end().to_string();
    content.push('\n');

    write_atomic(path, &content).map_err(ChangelogError::NotesWriteFailed)
}

/// Write `content` through a named temp file in the destination directory,
/// so a failed write never leaves a truncated file behind.
fn write_atomic(path: &Path, content: &str) -> Result<(), std::io::Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
