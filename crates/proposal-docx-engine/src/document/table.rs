use serde::Serialize;

use super::{DocumentError, paragraph::Paragraph};

/// One table cell holding a single paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub paragraph: Paragraph,
}

impl Cell {
    pub fn paragraph_mut(&mut self) -> &mut Paragraph {
        &mut self.paragraph
    }

    pub fn text(&self) -> String {
        self.paragraph.text()
    }

    /// Replaces the cell content with a single unformatted run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.paragraph.clear();
        self.paragraph.add_run(text);
    }
}

/// A rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub style: Option<String>,
    cols: usize,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub(crate) fn new(rows: usize, cols: usize, style: Option<&str>) -> Self {
        Self {
            style: style.map(str::to_string),
            cols,
            rows: (0..rows).map(|_| vec![Cell::default(); cols]).collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, DocumentError> {
        let (rows, cols) = (self.row_count(), self.cols);
        self.rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(DocumentError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            })
    }

    /// Cell text row by row, convenient for assertions and logging.
    pub fn texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(Cell::text).collect())
            .collect()
    }
}
