//! Section types and fixed changelog text fragments.

/// A named block of a changelog beginning at a `## [Name]` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Name inside the brackets, e.g. "Unreleased" or "1.2.3".
    pub name: String,
    /// The literal header line, trailing whitespace trimmed.
    pub header: String,
    /// Raw text between the header line and the next header.
    pub body: String,
}

/// A parsed changelog document: free text before the first header, then
/// an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    pub prefix: String,
    pub sections: Vec<Section>,
}

/// Reserved name of the section accumulating pending changes.
pub const UNRELEASED: &str = "Unreleased";

/// Body the [Unreleased] section is reset to after a release.
/// The leading empty line keeps a blank line between the header and the
/// first subsection when the document is rebuilt.
pub const UNRELEASED_BODY_TEMPLATE: &str = "\n### Added\n\n### Changed\n\n### Fixed";

/// Substituted when the [Unreleased] section has no content.
pub const NO_CHANGES_PLACEHOLDER: &str = "No changes.";
