/// Blockquote block type with owned delimiter constant.
///
/// Only a single quote level is rendered; `> > nested` flattens into one
/// quote paragraph.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Byte offset where content begins after all blockquote prefixes.
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> usize {
        let b = s.as_bytes();
        let mut i = 0usize;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        i
    }

    /// The quoted text with prefixes and surrounding whitespace removed.
    pub fn text(line: &str) -> &str {
        line[Self::strip_prefixes(line)..].trim()
    }
}
