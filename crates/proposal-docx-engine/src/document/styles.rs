use serde::Serialize;

/// What a named style can be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StyleKind {
    Paragraph,
    Table,
}

/// A named formatting preset in the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Style {
    pub name: String,
    pub kind: StyleKind,
}

impl Style {
    pub fn paragraph(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StyleKind::Paragraph,
        }
    }

    pub fn table(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StyleKind::Table,
        }
    }
}

/// The set of named styles a document can reference.
///
/// Lookups are capability queries: callers ask [`StyleCatalog::contains`]
/// before requesting a style and pick a fallback themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleCatalog {
    styles: Vec<Style>,
}

impl StyleCatalog {
    pub const NORMAL: &'static str = "Normal";
    pub const TITLE: &'static str = "Title";
    pub const QUOTE: &'static str = "Quote";
    pub const LIST_BULLET: &'static str = "List Bullet";
    pub const LIST_NUMBER: &'static str = "List Number";
    pub const TABLE_GRID: &'static str = "Table Grid";

    /// Deepest heading level a document supports.
    pub const MAX_HEADING_LEVEL: u8 = 6;
    /// Deepest list nesting level with its own style.
    pub const MAX_LIST_LEVEL: u8 = 3;

    /// A catalog with no styles at all.
    pub fn empty() -> Self {
        Self { styles: vec![] }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Adds a style, replacing any existing style with the same name.
    pub fn insert(&mut self, style: Style) {
        match self.styles.iter_mut().find(|s| s.name == style.name) {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Style> {
        let idx = self.styles.iter().position(|s| s.name == name)?;
        Some(self.styles.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// `Title` for level 0, `Heading N` otherwise.
    pub fn heading_style_name(level: u8) -> String {
        match level {
            0 => Self::TITLE.to_string(),
            n => format!("Heading {}", n.min(Self::MAX_HEADING_LEVEL)),
        }
    }

    /// `List Bullet` for level 1, `List Bullet 2` for level 2, and so on.
    pub fn list_style_name(base: &str, level: u8) -> String {
        if level <= 1 {
            base.to_string()
        } else {
            format!("{base} {level}")
        }
    }
}

impl Default for StyleCatalog {
    /// The styles of a stock word-processor template.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(Style::paragraph(Self::NORMAL));
        catalog.insert(Style::paragraph(Self::TITLE));
        for level in 1..=Self::MAX_HEADING_LEVEL {
            catalog.insert(Style::paragraph(Self::heading_style_name(level)));
        }
        catalog.insert(Style::paragraph(Self::QUOTE));
        for base in [Self::LIST_BULLET, Self::LIST_NUMBER] {
            for level in 1..=Self::MAX_LIST_LEVEL {
                catalog.insert(Style::paragraph(Self::list_style_name(base, level)));
            }
        }
        catalog.insert(Style::table(Self::TABLE_GRID));
        catalog
    }
}
