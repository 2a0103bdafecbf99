//! # Document Model
//!
//! An append-only document object graph: headings, paragraphs made of runs,
//! and tables, plus the style catalog and optional page header.
//!
//! The converter only appends. Callers own the document before and after a
//! conversion and decide how to persist it (see [`crate::docx`]).

pub mod paragraph;
pub mod styles;
pub mod table;

use serde::Serialize;

pub use paragraph::{Paragraph, Run, Spacing};
pub use styles::{Style, StyleCatalog, StyleKind};
pub use table::{Cell, Table};

use crate::header::Header;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Style not found in catalog: {0}")]
    UnknownStyle(String),
    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} table")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("A table needs at least one row and one column, got {rows}x{cols}")]
    EmptyTable { rows: usize, cols: usize },
}

/// A top-level body element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// Level 0 is the document title; 1 to 6 are section headings.
    Heading { level: u8, text: String },
    Paragraph(Paragraph),
    Table(Table),
}

impl Block {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    styles: StyleCatalog,
    header: Option<Header>,
    blocks: Vec<Block>,
}

impl Document {
    /// An empty document using the stock style catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(styles: StyleCatalog) -> Self {
        Self {
            styles,
            ..Self::default()
        }
    }

    pub fn styles(&self) -> &StyleCatalog {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleCatalog {
        &mut self.styles
    }

    /// Whether `name` can be passed to [`Document::add_paragraph`] or
    /// [`Document::add_table`].
    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains(name)
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn set_header(&mut self, header: Header) {
        self.header = Some(header);
    }

    /// Appends a heading. Levels above [`StyleCatalog::MAX_HEADING_LEVEL`]
    /// are clamped.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> &Block {
        self.blocks.push(Block::Heading {
            level: level.min(StyleCatalog::MAX_HEADING_LEVEL),
            text: text.into(),
        });
        &self.blocks[self.blocks.len() - 1]
    }

    /// Appends an empty paragraph, optionally with a named style.
    pub fn add_paragraph(&mut self, style: Option<&str>) -> Result<&mut Paragraph, DocumentError> {
        self.check_style(style)?;
        self.blocks
            .push(Block::Paragraph(Paragraph::with_style(style)));
        let Some(Block::Paragraph(p)) = self.blocks.last_mut() else {
            unreachable!("a paragraph was just pushed");
        };
        Ok(p)
    }

    /// Appends a `rows` x `cols` table of empty cells.
    pub fn add_table(
        &mut self,
        rows: usize,
        cols: usize,
        style: Option<&str>,
    ) -> Result<&mut Table, DocumentError> {
        if rows == 0 || cols == 0 {
            return Err(DocumentError::EmptyTable { rows, cols });
        }
        self.check_style(style)?;
        self.blocks.push(Block::Table(Table::new(rows, cols, style)));
        let Some(Block::Table(t)) = self.blocks.last_mut() else {
            unreachable!("a table was just pushed");
        };
        Ok(t)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Body paragraphs in order (headings and table cells excluded).
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(Block::as_paragraph)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(Block::as_table)
    }

    /// Text of the first level-0 heading, used as the document title.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Heading { level: 0, text } => Some(text.as_str()),
            _ => None,
        })
    }

    fn check_style(&self, style: Option<&str>) -> Result<(), DocumentError> {
        match style {
            Some(name) if !self.styles.contains(name) => {
                Err(DocumentError::UnknownStyle(name.to_string()))
            }
            _ => Ok(()),
        }
    }
}
