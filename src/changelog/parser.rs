//! Split a changelog document into its named sections.

use std::path::Path;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::changelog::format::{Changelog, Section, UNRELEASED};
use crate::error::ChangelogError;

/// Section header pattern: `## [Name]` with an optional ` - label` tail
/// (typically a release date).
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## \[([^\]]+)\](?: - .+)?\s*$").expect("valid regex"));

/// Split raw changelog text into a prefix and an ordered list of sections.
///
/// Each section spans from its `## [...]` header line to the start of the
/// next header (or end of document). Fails if no header is found.
pub fn parse(text: &str) -> Result<Changelog, ChangelogError> {
    let mut prefix: Vec<&str> = Vec::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(String, String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(caps) = SECTION_HEADER.captures(line) {
            if let Some(open) = current.take() {
                sections.push(close_section(open));
            }
            current = Some((caps[1].to_string(), line.trim_end().to_string(), Vec::new()));
        } else if let Some((_, _, body)) = current.as_mut() {
            body.push(line);
        } else {
            prefix.push(line);
        }
    }

    if let Some(open) = current.take() {
        sections.push(close_section(open));
    }

    if sections.is_empty() {
        return Err(ChangelogError::NoSections);
    }

    debug!("parsed {} changelog sections", sections.len());

    Ok(Changelog {
        prefix: prefix.join("\n"),
        sections,
    })
}

fn close_section((name, header, body): (String, String, Vec<&str>)) -> Section {
    Section {
        name,
        header,
        body: body.join("\n"),
    }
}

/// Read and parse a changelog file.
pub fn read_changelog(path: &Path) -> Result<Changelog, ChangelogError> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(ChangelogError::ReadFailed)?;

    parse(&text)
}

/// Find a section by case-insensitive name. First match wins.
pub fn find_section(changelog: &Changelog, name: &str) -> Option<usize> {
    changelog
        .sections
        .iter()
        .position(|s| s.name.eq_ignore_ascii_case(name))
}

/// Index of the [Unreleased] section, which every changelog must have.
pub fn unreleased_index(changelog: &Changelog) -> Result<usize, ChangelogError> {
    find_section(changelog, UNRELEASED)
        .ok_or_else(|| ChangelogError::SectionNotFound(UNRELEASED.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_prefix_and_sections() {
        let text = "# Changelog\n\nAll notable changes.\n\n## [Unreleased]\n\n### Added\n- x\n\n## [1.0.0] - 2024-01-01\n\n- Initial release\n";
        let changelog = parse(text).unwrap();

        assert!(changelog.prefix.starts_with("# Changelog"));
        assert_eq!(changelog.sections.len(), 2);
        assert_eq!(changelog.sections[0].name, "Unreleased");
        assert_eq!(changelog.sections[0].header, "## [Unreleased]");
        assert_eq!(changelog.sections[1].name, "1.0.0");
        assert_eq!(changelog.sections[1].header, "## [1.0.0] - 2024-01-01");
        assert!(changelog.sections[1].body.contains("- Initial release"));
    }

    #[test]
    fn test_parse_no_prefix() {
        let text = "## [Unreleased]\n\n- change\n";
        let changelog = parse(text).unwrap();

        assert_eq!(changelog.prefix, "");
        assert_eq!(changelog.sections.len(), 1);
    }

    #[test]
    fn test_parse_no_headers_fails() {
        let text = "# Changelog\n\nJust some text without sections.\n";
        let result = parse(text);

        assert!(matches!(result, Err(ChangelogError::NoSections)));
    }

    #[test]
    fn test_parse_ignores_subsection_headers() {
        let text = "## [Unreleased]\n\n### Added\n- x\n### Fixed\n- y\n";
        let changelog = parse(text).unwrap();

        assert_eq!(changelog.sections.len(), 1);
        assert!(changelog.sections[0].body.contains("### Added"));
        assert!(changelog.sections[0].body.contains("### Fixed"));
    }

    #[test]
    fn test_parse_bracket_name_stops_at_closing_bracket() {
        let text = "## [0.3.0-rc.1] - 2024-05-01\n\n- candidate\n";
        let changelog = parse(text).unwrap();

        assert_eq!(changelog.sections[0].name, "0.3.0-rc.1");
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let text = "# Changelog\r\n\r\n## [Unreleased]\r\n\r\n- change\r\n";
        let changelog = parse(text).unwrap();

        assert_eq!(changelog.sections.len(), 1);
        assert_eq!(changelog.sections[0].name, "Unreleased");
        assert_eq!(changelog.sections[0].header, "## [Unreleased]");
    }

    #[test]
    fn test_find_section_case_insensitive() {
        let text = "## [unreleased]\n\n- change\n\n## [1.0.0] - 2024-01-01\n";
        let changelog = parse(text).unwrap();

        assert_eq!(find_section(&changelog, "Unreleased"), Some(0));
        assert_eq!(find_section(&changelog, "1.0.0"), Some(1));
        assert_eq!(find_section(&changelog, "2.0.0"), None);
    }

    #[test]
    fn test_unreleased_index_missing() {
        let text = "## [1.0.0] - 2024-01-01\n\n- Initial release\n";
        let changelog = parse(text).unwrap();
        let result = unreleased_index(&changelog);

        assert!(matches!(result, Err(ChangelogError::SectionNotFound(_))));
    }

    #[test]
    fn test_read_changelog_missing_file() {
        let result = read_changelog(Path::new("/nonexistent/CHANGELOG.md"));

        assert!(matches!(result, Err(ChangelogError::FileNotFound(_))));
    }
}
