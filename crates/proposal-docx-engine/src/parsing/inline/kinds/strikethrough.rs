/// Strikethrough inline type (`~~struck~~`).
///
/// A single `~` is plain text.
pub struct Strikethrough;

impl Strikethrough {
    pub const TILDES: &'static [u8] = b"~~";
}
