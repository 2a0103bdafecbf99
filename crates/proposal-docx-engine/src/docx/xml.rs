use std::borrow::Cow;

pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Points to twentieths of a point, the unit of `w:spacing`.
pub fn twips(pt: u16) -> u32 {
    u32::from(pt) * 20
}

/// Points to half-points, the unit of `w:sz`.
pub fn half_points(pt: u16) -> u32 {
    u32::from(pt) * 2
}

/// Escapes element text. Characters XML 1.0 cannot carry are dropped.
pub fn text(s: &str) -> Cow<'_, str> {
    match strip_forbidden(s) {
        Cow::Borrowed(s) => html_escape::encode_text(s),
        Cow::Owned(s) => Cow::Owned(html_escape::encode_text(&s).into_owned()),
    }
}

/// Escapes a double-quoted attribute value, dropping the same characters as [`text`].
pub fn attr(s: &str) -> Cow<'_, str> {
    match strip_forbidden(s) {
        Cow::Borrowed(s) => html_escape::encode_double_quoted_attribute(s),
        Cow::Owned(s) => Cow::Owned(html_escape::encode_double_quoted_attribute(&s).into_owned()),
    }
}

fn strip_forbidden(s: &str) -> Cow<'_, str> {
    if s.chars().any(is_forbidden) {
        Cow::Owned(s.chars().filter(|c| !is_forbidden(*c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}

fn is_forbidden(c: char) -> bool {
    (c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
        || matches!(c, '\u{FFFE}' | '\u{FFFF}')
}
