use super::kinds::{BlockQuote, Heading, ListItem, ListKind, TableRow, ThematicBreak};

/// Classification of a single line, borrowing text from the input.
///
/// This is phase 1 of block handling: each line is classified on its own.
/// Table state across lines is the [`TableAccumulator`](super::TableAccumulator)'s job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Contains a pipe; buffered until the table run ends.
    TableRow(&'a str),
    Heading { level: u8, text: &'a str },
    ThematicBreak,
    BlockQuote { text: &'a str },
    ListItem {
        kind: ListKind,
        level: u8,
        text: &'a str,
    },
    /// Empty or whitespace-only; produces no output.
    Blank,
    /// Anything else, kept verbatim for inline tokenizing.
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the block phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line. First match wins, in this order: table row,
    /// heading, rule, quote, list item, blank, paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim_end_matches(['\r', '\n']);

        if TableRow::is_table_line(line) {
            return LineClass::TableRow(line);
        }
        if Heading::opens(line) {
            let (level, text) = Heading::parse(line);
            return LineClass::Heading { level, text };
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        if BlockQuote::opens(line) {
            return LineClass::BlockQuote {
                text: BlockQuote::text(line),
            };
        }
        if let Some((kind, level, text)) = ListItem::parse(line) {
            return LineClass::ListItem { kind, level, text };
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        LineClass::Paragraph { text: line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classify(line: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(line)
    }

    #[rstest]
    #[case("| a | b |", LineClass::TableRow("| a | b |"))]
    #[case("# Title", LineClass::Heading { level: 1, text: "Title" })]
    #[case("---", LineClass::ThematicBreak)]
    #[case("***", LineClass::ThematicBreak)]
    #[case("> quoted", LineClass::BlockQuote { text: "quoted" })]
    #[case("- item", LineClass::ListItem { kind: ListKind::Bullet, level: 1, text: "item" })]
    #[case("3. third", LineClass::ListItem { kind: ListKind::Numbered, level: 1, text: "third" })]
    #[case("", LineClass::Blank)]
    #[case("   \t", LineClass::Blank)]
    #[case("Just text.", LineClass::Paragraph { text: "Just text." })]
    fn classifies_each_kind(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn table_beats_list_and_quote() {
        assert!(matches!(classify("- a | b"), LineClass::TableRow(_)));
        assert!(matches!(classify("> a | b"), LineClass::TableRow(_)));
    }

    #[test]
    fn heading_with_pipe_is_heading() {
        assert_eq!(
            classify("## A | B"),
            LineClass::Heading {
                level: 2,
                text: "A | B"
            }
        );
    }

    #[test]
    fn rule_beats_bullet_list() {
        assert_eq!(classify("***"), LineClass::ThematicBreak);
        assert!(matches!(classify("* * *"), LineClass::ListItem { .. }));
    }

    #[test]
    fn carriage_return_is_stripped() {
        assert_eq!(
            classify("Windows line\r"),
            LineClass::Paragraph {
                text: "Windows line"
            }
        );
    }

    #[test]
    fn indented_paragraph_keeps_whitespace() {
        assert_eq!(
            classify("  indented text"),
            LineClass::Paragraph {
                text: "  indented text"
            }
        );
    }

    #[test]
    fn classification_snapshot() {
        let lines = ["#### **Budget**", "  * nested", ">> twice quoted", "1.5 million"];
        let classes: Vec<_> = lines.iter().map(|l| classify(l)).collect();
        insta::assert_debug_snapshot!(classes, @r#"
        [
            Heading {
                level: 4,
                text: "**Budget**",
            },
            ListItem {
                kind: Bullet,
                level: 2,
                text: "nested",
            },
            BlockQuote {
                text: "twice quoted",
            },
            Paragraph {
                text: "1.5 million",
            },
        ]
        "#);
    }
}
