//! Changelog parsing and writing.

pub mod format;
pub mod parser;
pub mod writer;

pub use format::{Changelog, Section, NO_CHANGES_PLACEHOLDER, UNRELEASED_BODY_TEMPLATE};
pub use parser::{find_section, parse, read_changelog, unreleased_index};
pub use writer::{rebuild, write_changelog, write_notes};
