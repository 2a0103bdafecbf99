use crate::document::StyleCatalog;

/// ATX heading (`# Title`, `## Section`, ...).
pub struct Heading;

impl Heading {
    pub const PREFIX: char = '#';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Returns the heading level and text.
    ///
    /// The level is the number of leading `#`, clamped to the deepest
    /// supported heading. Text is whatever follows, trimmed; a line of only
    /// `#` characters is a heading with empty text.
    pub fn parse(line: &str) -> (u8, &str) {
        let rest = line.trim_start_matches(Self::PREFIX);
        let hashes = line.len() - rest.len();
        let level = hashes.min(StyleCatalog::MAX_HEADING_LEVEL as usize) as u8;
        (level, rest.trim())
    }
}
