//! Extract and promote the [Unreleased] section.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex_lite::Regex;
use tracing::debug;

use crate::changelog::format::{
    Changelog, Section, NO_CHANGES_PLACEHOLDER, UNRELEASED, UNRELEASED_BODY_TEMPLATE,
};
use crate::changelog::parser::unreleased_index;
use crate::error::{ChangelogError, ReleaseError};

/// Date pattern: YYYY-MM-DD.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Pending notes from the [Unreleased] section (alpha/beta modes).
///
/// Returns the body trimmed of surrounding blank lines, or the fixed
/// placeholder when nothing has accumulated.
pub fn extract_notes(changelog: &Changelog) -> Result<String, ChangelogError> {
    let idx = unreleased_index(changelog)?;

    let notes = changelog.sections[idx].body.trim();
    if notes.is_empty() {
        Ok(NO_CHANGES_PLACEHOLDER.to_string())
    } else {
        Ok(notes.to_string())
    }
}

/// Promote the [Unreleased] content into a new `## [version] - date` section.
///
/// The [Unreleased] section is reset to the empty subsection template and
/// the new section is inserted directly after it. Returns the promoted
/// content as the release notes.
///
/// Rolling the same version twice is not guarded against and appends a
/// duplicate section.
pub fn roll_release(
    changelog: &mut Changelog,
    version: &str,
    date: &str,
) -> Result<String, ChangelogError> {
    let idx = unreleased_index(changelog)?;

    let mut content = changelog.sections[idx].body.trim().to_string();
    if content.is_empty() {
        content = NO_CHANGES_PLACEHOLDER.to_string();
    }

    changelog.sections[idx] = Section {
        name: UNRELEASED.to_string(),
        header: format!("## [{UNRELEASED}]"),
        body: UNRELEASED_BODY_TEMPLATE.to_string(),
    };

    changelog.sections.insert(
        idx + 1,
        Section {
            name: version.to_string(),
            header: format!("## [{version}] - {date}"),
            body: format!("\n{content}"),
        },
    );

    debug!("rolled unreleased notes into version {}", version);
    Ok(content)
}

/// Resolve the release date: validate an explicit override, or use today.
pub fn release_date(explicit: Option<&str>) -> Result<String, ReleaseError> {
    match explicit {
        Some(raw) => {
            if !DATE_PATTERN.is_match(raw) {
                return Err(ReleaseError::InvalidDate(raw.to_string()));
            }

            // Parse and validate it's a real date
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ReleaseError::InvalidDate(raw.to_string()))?;

            Ok(raw.to_string())
        }
        None => Ok(Local::now().format("%Y-%m-%d").to_string()),
    }
}
