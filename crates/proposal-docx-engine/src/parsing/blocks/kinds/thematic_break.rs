/// Horizontal rule (`---`, `***`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];

    /// The trimmed line must be exactly one of [`ThematicBreak::MARKERS`].
    pub fn matches(line: &str) -> bool {
        Self::MARKERS.contains(&line.trim())
    }
}
