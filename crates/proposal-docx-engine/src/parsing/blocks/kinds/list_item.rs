use std::sync::OnceLock;

use regex::Regex;

use crate::document::StyleCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `*`, `-` or `+` marker.
    Bullet,
    /// `1.` style marker.
    Numbered,
}

impl ListKind {
    /// The level-1 paragraph style for this kind of list.
    pub fn base_style(self) -> &'static str {
        match self {
            ListKind::Bullet => StyleCatalog::LIST_BULLET,
            ListKind::Numbered => StyleCatalog::LIST_NUMBER,
        }
    }

    /// The style for an item nested at `level` (1-based).
    pub fn style_for_level(self, level: u8) -> String {
        StyleCatalog::list_style_name(self.base_style(), level)
    }
}

/// List item block type. A marker followed by whitespace, at any
/// indentation.
pub struct ListItem;

impl ListItem {
    /// Leading whitespace characters per nesting level.
    pub const INDENT_WIDTH: usize = 2;

    fn bullet_marker() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*[*+\-]\s").expect("Invalid bullet marker regex"))
    }

    fn numbered_marker() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*\d+\.\s").expect("Invalid numbered marker regex"))
    }

    /// Returns kind, nesting level (1 to [`StyleCatalog::MAX_LIST_LEVEL`])
    /// and the item text with marker and surrounding whitespace removed.
    pub fn parse(line: &str) -> Option<(ListKind, u8, &str)> {
        let (kind, marker_end) = if let Some(m) = Self::numbered_marker().find(line) {
            (ListKind::Numbered, m.end())
        } else if let Some(m) = Self::bullet_marker().find(line) {
            (ListKind::Bullet, m.end())
        } else {
            return None;
        };

        Some((kind, Self::level(line), line[marker_end..].trim()))
    }

    /// Nesting level from leading whitespace, clamped to the deepest level
    /// that has its own style.
    pub fn level(line: &str) -> u8 {
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        let level = indent / Self::INDENT_WIDTH + 1;
        level.min(StyleCatalog::MAX_LIST_LEVEL as usize) as u8
    }
}
