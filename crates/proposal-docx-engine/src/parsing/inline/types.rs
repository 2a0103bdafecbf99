use crate::parsing::span::Span;

use super::kinds::{CodeSpan, Emphasis, EmphasisChar, Strikethrough};

/// The delimiter pair that produced a styled segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `***text***` or `___text___`
    BoldItalic(EmphasisChar),
    /// `**text**` or `__text__`
    Bold(EmphasisChar),
    /// `*text*` or `_text_`
    Italic(EmphasisChar),
    /// `` `text` ``
    Code,
    /// `~~text~~`
    Strike,
}

impl Marker {
    /// Builds the emphasis marker for a run of `len` delimiter characters.
    pub fn emphasis(ch: EmphasisChar, len: usize) -> Self {
        match len {
            3 => Self::BoldItalic(ch),
            2 => Self::Bold(ch),
            _ => Self::Italic(ch),
        }
    }

    /// The literal delimiter written on both sides of the content.
    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Self::BoldItalic(ch) => Emphasis::delimiter(ch, 3),
            Self::Bold(ch) => Emphasis::delimiter(ch, 2),
            Self::Italic(ch) => Emphasis::delimiter(ch, 1),
            Self::Code => CodeSpan::DELIMITER,
            Self::Strike => Strikethrough::TILDES,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Self::BoldItalic(_) | Self::Bold(_))
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Self::BoldItalic(_) | Self::Italic(_))
    }

    pub fn is_code(self) -> bool {
        matches!(self, Self::Code)
    }

    pub fn is_strike(self) -> bool {
        matches!(self, Self::Strike)
    }
}

/// One tokenizer segment with byte spans into the line.
///
/// Segments are ordered by start offset and never overlap; together they
/// cover the whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSegment {
    /// Unstyled text, emitted exactly as written (markers included when
    /// they were never closed).
    Text(Span),
    /// A matched delimiter pair.
    Styled {
        /// Full span including both delimiters.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
        marker: Marker,
    },
}

impl InlineSegment {
    /// Span of the segment in the line, delimiters included.
    pub fn full_span(&self) -> Span {
        match self {
            Self::Text(sp) => *sp,
            Self::Styled { full, .. } => *full,
        }
    }

    /// Span of the text that ends up in the document (delimiters removed).
    pub fn text_span(&self) -> Span {
        match self {
            Self::Text(sp) => *sp,
            Self::Styled { inner, .. } => *inner,
        }
    }

    pub fn marker(&self) -> Option<Marker> {
        match self {
            Self::Text(_) => None,
            Self::Styled { marker, .. } => Some(*marker),
        }
    }
}

/// Returns the de-marked text of `segment` within `line`.
pub fn segment_text<'a>(line: &'a str, segment: &InlineSegment) -> &'a str {
    segment.text_span().slice(line)
}
