use std::sync::OnceLock;

use regex::Regex;

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default when no other
/// block opener matches. Inline tokenizing is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Whether the line opens with a bold label ending in a colon, like
    /// `**Company Name:** ACME`. Runs of such lines are form fields and get
    /// compact spacing.
    pub fn is_form_field(line: &str) -> bool {
        static FORM_FIELD: OnceLock<Regex> = OnceLock::new();
        FORM_FIELD
            .get_or_init(|| Regex::new(r"^\*\*[^:]+:\*\*").expect("Invalid form field regex"))
            .is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_form_field_label() {
        assert!(Paragraph::is_form_field("**Company Name:** ACME"));
        assert!(Paragraph::is_form_field("**Date:**"));
    }

    #[test]
    fn rejects_other_bold_text() {
        assert!(!Paragraph::is_form_field("**Company Name**: ACME"));
        assert!(!Paragraph::is_form_field("Name: **ACME**"));
        assert!(!Paragraph::is_form_field(" **Date:** x"));
        assert!(!Paragraph::is_form_field("**:**"));
    }
}
