pub mod blocks;
pub mod inline;
pub mod span;

pub use blocks::{LineClass, MarkdownLineClassifier, ParsedTable, TableAccumulator};
pub use inline::{InlineSegment, Marker, tokenize};
pub use span::Span;

/// Splits a markdown document into classified lines.
///
/// Surrounding whitespace of the whole document is trimmed first, so
/// leading and trailing blank lines never reach the caller.
pub fn classify_lines(markdown: &str) -> impl Iterator<Item = LineClass<'_>> {
    let classifier = MarkdownLineClassifier;
    markdown
        .trim()
        .split('\n')
        .map(move |line| classifier.classify(line))
}
