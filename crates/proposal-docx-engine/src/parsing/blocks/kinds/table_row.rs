use std::sync::OnceLock;

use regex::Regex;

/// Pipe table row (`| a | b |`).
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// A line belongs to a table when, trimmed, it contains a pipe and is not
    /// a heading.
    pub fn is_table_line(line: &str) -> bool {
        let t = line.trim();
        !t.is_empty() && t.contains(Self::PIPE) && !t.starts_with('#')
    }

    /// Header/body divider such as `|---|:--:|`: only pipes, dashes, colons
    /// and whitespace.
    pub fn is_separator(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^[\s|:\-]*$").expect("Invalid separator regex"))
            .is_match(line)
    }

    /// Splits a row on pipes and trims each cell. The empty cell produced by a
    /// leading or trailing pipe is dropped.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = line.split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }
}
