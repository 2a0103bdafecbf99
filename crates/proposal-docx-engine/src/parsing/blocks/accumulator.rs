use log::debug;

use super::kinds::TableRow;

/// A table parsed from a run of pipe rows, ready to be materialized.
///
/// Always rectangular: rows shorter than the widest row are padded with
/// empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable<'a> {
    pub rows: Vec<Vec<&'a str>>,
    pub cols: usize,
}

impl ParsedTable<'_> {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Default)]
enum TableState<'a> {
    #[default]
    Idle,
    /// Raw lines of the current table run. Never empty.
    Buffering(Vec<&'a str>),
}

/// Buffers consecutive table rows until the run ends.
///
/// `Idle -> Buffering` on the first row, `Buffering -> Buffering` on each
/// further row, and `Buffering -> Idle` on [`TableAccumulator::flush`]
/// (a non-table line) or [`TableAccumulator::finish`] (end of input).
#[derive(Debug, Default)]
pub struct TableAccumulator<'a> {
    state: TableState<'a>,
}

impl<'a> TableAccumulator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table row to the current run, starting one if idle.
    pub fn push(&mut self, line: &'a str) {
        if let TableState::Buffering(lines) = &mut self.state {
            lines.push(line);
        } else {
            self.state = TableState::Buffering(vec![line]);
        }
    }

    /// Ends the current run, if any, and parses it.
    ///
    /// Returns `None` when idle, or when the run held only separator lines.
    #[must_use]
    pub fn flush(&mut self) -> Option<ParsedTable<'a>> {
        match std::mem::take(&mut self.state) {
            TableState::Idle => None,
            TableState::Buffering(lines) => materialize(&lines),
        }
    }

    /// End of input: flushes whatever is still buffered.
    #[must_use]
    pub fn finish(mut self) -> Option<ParsedTable<'a>> {
        self.flush()
    }
}

fn materialize<'a>(lines: &[&'a str]) -> Option<ParsedTable<'a>> {
    let mut rows: Vec<Vec<&'a str>> = lines
        .iter()
        .copied()
        .filter(|l| !TableRow::is_separator(l))
        .map(TableRow::split_cells)
        .filter(|cells| !cells.is_empty())
        .collect();

    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.is_empty() || cols == 0 {
        debug!("dropping table run of {} line(s) with no data rows", lines.len());
        return None;
    }

    for row in &mut rows {
        row.resize(cols, "");
    }
    Some(ParsedTable { rows, cols })
}
