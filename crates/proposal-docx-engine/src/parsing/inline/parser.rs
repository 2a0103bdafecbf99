use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, EmphasisChar, Strikethrough},
    types::{InlineSegment, Marker},
};

/// Splits one line into plain and styled segments.
///
/// Scans left to right. At each position the candidate delimiters are tried
/// longest first (`***`, `**`, `*`); a candidate matches when the same
/// delimiter appears again later in the line with at least one character in
/// between. The content of a match is not scanned again, so markers never
/// nest. A delimiter that is never closed stays in the surrounding text
/// segment verbatim.
///
/// # Returns
/// Segments covering the entire input in order. Text between matches is
/// emitted as `InlineSegment::Text`; an empty line yields no segments.
pub fn tokenize(s: &str) -> Vec<InlineSegment> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineSegment>, start: usize, end: usize) {
        if end > start {
            out.push(InlineSegment::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(seg) = try_parse_styled(&mut cur) {
            let full = seg.full_span();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(seg);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Delimiter candidates that may open at the cursor, in the order they
/// must be tried.
fn candidates(cur: &Cursor<'_>) -> Vec<Marker> {
    let Some(b) = cur.peek() else {
        return vec![];
    };

    if let Some(ch) = EmphasisChar::from_byte(b) {
        return Emphasis::RUN_LENGTHS
            .iter()
            .map(|&len| Marker::emphasis(ch, len))
            .filter(|m| cur.starts_with(m.delimiter()))
            .collect();
    }
    if b == CodeSpan::TICK {
        return vec![Marker::Code];
    }
    if cur.starts_with(Strikethrough::TILDES) {
        return vec![Marker::Strike];
    }
    vec![]
}

/// Attempts to match a delimiter pair starting at the cursor.
///
/// Returns `None` if no candidate delimiter is closed later in the line.
/// On failure the cursor is left where it was.
fn try_parse_styled(cur: &mut Cursor<'_>) -> Option<InlineSegment> {
    let start = cur.pos();

    for marker in candidates(cur) {
        let delim = marker.delimiter();
        let inner_start = start + delim.len();
        // Content needs at least one character.
        let Some(close) = cur.find_from(inner_start + 1, delim) else {
            continue;
        };
        let end = close + delim.len();
        cur.seek(end);
        return Some(InlineSegment::Styled {
            full: Span { start, end },
            inner: Span {
                start: inner_start,
                end: close,
            },
            marker,
        });
    }

    None
}
