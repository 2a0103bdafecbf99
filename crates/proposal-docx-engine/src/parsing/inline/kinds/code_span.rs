/// Code span inline type with owned delimiter constant.
///
/// The content of a code span is rendered in a monospace face; it is not
/// re-scanned for other markers.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    pub const DELIMITER: &'static [u8] = b"`";
}
