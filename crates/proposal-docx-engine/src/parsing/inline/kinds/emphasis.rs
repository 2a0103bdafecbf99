/// Which character an emphasis run is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisChar {
    Star,
    Underscore,
}

impl EmphasisChar {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            Emphasis::STAR => Some(Self::Star),
            Emphasis::UNDERSCORE => Some(Self::Underscore),
            _ => None,
        }
    }
}

/// Emphasis delimiters: one character is italic, two bold, three both.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Delimiter lengths to try at a single position, longest first, so that
    /// `***x***` is one bold-italic span rather than italic + text + italic.
    pub const RUN_LENGTHS: [usize; 3] = [3, 2, 1];

    /// Returns the delimiter string for a run of `len` copies of `ch`.
    pub fn delimiter(ch: EmphasisChar, len: usize) -> &'static [u8] {
        match (ch, len) {
            (EmphasisChar::Star, 3) => b"***",
            (EmphasisChar::Star, 2) => b"**",
            (EmphasisChar::Star, _) => b"*",
            (EmphasisChar::Underscore, 3) => b"___",
            (EmphasisChar::Underscore, 2) => b"__",
            (EmphasisChar::Underscore, _) => b"_",
        }
    }
}
