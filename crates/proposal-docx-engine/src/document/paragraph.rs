use serde::Serialize;

/// A contiguous piece of text with uniform character formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    /// Font face override, e.g. a monospace face for code.
    pub font: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.italic = italic;
        self
    }

    pub fn set_strike(&mut self, strike: bool) -> &mut Self {
        self.strike = strike;
        self
    }

    pub fn set_font(&mut self, font: impl Into<String>) -> &mut Self {
        self.font = Some(font.into());
        self
    }

    /// True when the run carries no character formatting.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.strike && self.font.is_none()
    }
}

/// Space before and after a paragraph, in points. `None` keeps the style's
/// own spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub before_pt: Option<u16>,
    pub after_pt: Option<u16>,
}

impl Spacing {
    pub fn new(before_pt: u16, after_pt: u16) -> Self {
        Self {
            before_pt: Some(before_pt),
            after_pt: Some(after_pt),
        }
    }

    pub fn is_default(&self) -> bool {
        self.before_pt.is_none() && self.after_pt.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Paragraph style name; `None` means the document default.
    pub style: Option<String>,
    pub spacing: Spacing,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: Option<&str>) -> Self {
        Self {
            style: style.map(str::to_string),
            ..Self::default()
        }
    }

    /// Appends an unformatted run and returns it for further styling.
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        self.runs.push(Run::new(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    pub fn set_spacing(&mut self, spacing: Spacing) -> &mut Self {
        self.spacing = spacing;
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }

    /// Removes all runs, keeping style and spacing.
    pub fn clear(&mut self) {
        self.runs.clear();
    }
}
