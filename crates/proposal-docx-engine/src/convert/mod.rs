//! # Markdown Conversion
//!
//! Drives the parsing layers over a markdown string and appends the result
//! to a caller-owned [`Document`].
//!
//! Conversion never fails on markdown input: unknown styles fall back,
//! unclosed markers stay literal, empty tables are skipped and deep headings
//! are clamped. Errors returned from [`MarkdownConverter::convert`] come
//! from the document itself.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentError, Paragraph, Spacing, StyleCatalog};
use crate::parsing::{
    self, InlineSegment, LineClass, ParsedTable, TableAccumulator,
    blocks::{ListKind, kinds},
    inline::tokenize,
};

/// Rendering choices that are not dictated by the markdown itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Font face for `` `code` `` runs.
    pub code_font: String,
    /// Space above and below a horizontal rule paragraph, in points.
    pub rule_spacing_pt: u16,
    /// Table style applied when the catalog has it.
    pub table_style: String,
    /// Space above and below `**Label:** value` lines, in points.
    pub form_field_spacing_pt: u16,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            code_font: "Courier New".to_string(),
            rule_spacing_pt: 6,
            table_style: StyleCatalog::TABLE_GRID.to_string(),
            form_field_spacing_pt: 0,
        }
    }
}

/// Which inline markers turn into formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineScope {
    /// Paragraphs and list items: bold, italic, code and strikethrough.
    Full,
    /// Table cells: bold and italic only. Code and strike markers are still
    /// removed but add no formatting.
    Emphasis,
}

#[derive(Debug, Default)]
struct Stats {
    lines: usize,
    headings: usize,
    paragraphs: usize,
    list_items: usize,
    quotes: usize,
    rules: usize,
    tables: usize,
    style_fallbacks: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConvertOptions,
}

impl MarkdownConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Appends the markdown's content to `doc`, in document order.
    ///
    /// Existing content (a title, for example) is left untouched. Saving the
    /// document is up to the caller.
    pub fn convert(&self, markdown: &str, doc: &mut Document) -> Result<(), DocumentError> {
        let mut sink = Sink {
            doc,
            options: &self.options,
            stats: Stats::default(),
        };
        let mut tables = TableAccumulator::new();

        for class in parsing::classify_lines(markdown) {
            sink.stats.lines += 1;
            if let LineClass::TableRow(line) = class {
                tables.push(line);
                continue;
            }
            if let Some(table) = tables.flush() {
                sink.add_table(&table)?;
            }
            sink.add_block(class)?;
        }
        if let Some(table) = tables.finish() {
            sink.add_table(&table)?;
        }

        let s = &sink.stats;
        debug!(
            "converted {} lines: {} headings, {} paragraphs, {} list items, {} quotes, {} rules, {} tables, {} style fallbacks",
            s.lines,
            s.headings,
            s.paragraphs,
            s.list_items,
            s.quotes,
            s.rules,
            s.tables,
            s.style_fallbacks
        );
        Ok(())
    }
}

/// Per-call conversion state. Nothing here outlives one `convert` call.
struct Sink<'d, 'o> {
    doc: &'d mut Document,
    options: &'o ConvertOptions,
    stats: Stats,
}

impl Sink<'_, '_> {
    fn add_block(&mut self, class: LineClass<'_>) -> Result<(), DocumentError> {
        match class {
            LineClass::Heading { level, text } => {
                self.doc.add_heading(text, level);
                self.stats.headings += 1;
            }
            LineClass::ThematicBreak => self.add_rule()?,
            LineClass::BlockQuote { text } => self.add_quote(text)?,
            LineClass::ListItem { kind, level, text } => self.add_list_item(kind, level, text)?,
            LineClass::Paragraph { text } => self.add_formatted_paragraph(text)?,
            // Blank lines add no spacing; table rows belong to the accumulator.
            LineClass::Blank | LineClass::TableRow(_) => {}
        }
        Ok(())
    }

    fn add_rule(&mut self) -> Result<(), DocumentError> {
        let pt = self.options.rule_spacing_pt;
        self.doc
            .add_paragraph(None)?
            .set_spacing(Spacing::new(pt, pt));
        self.stats.rules += 1;
        Ok(())
    }

    fn add_quote(&mut self, text: &str) -> Result<(), DocumentError> {
        let style = self.available(StyleCatalog::QUOTE);
        let p = self.doc.add_paragraph(style.as_deref())?;
        if !text.is_empty() {
            p.add_run(text);
        }
        self.stats.quotes += 1;
        Ok(())
    }

    fn add_list_item(&mut self, kind: ListKind, level: u8, text: &str) -> Result<(), DocumentError> {
        let style = self.list_style(kind, level);
        let p = self.doc.add_paragraph(style.as_deref())?;
        append_inline_runs(p, text, InlineScope::Full, self.options);
        self.stats.list_items += 1;
        Ok(())
    }

    fn add_formatted_paragraph(&mut self, line: &str) -> Result<(), DocumentError> {
        let p = self.doc.add_paragraph(None)?;
        if kinds::Paragraph::is_form_field(line) {
            let pt = self.options.form_field_spacing_pt;
            p.set_spacing(Spacing::new(pt, pt));
        }
        append_inline_runs(p, line, InlineScope::Full, self.options);
        self.stats.paragraphs += 1;
        Ok(())
    }

    fn add_table(&mut self, parsed: &ParsedTable<'_>) -> Result<(), DocumentError> {
        let options = self.options;
        let style = self.available(&options.table_style);
        let table = self
            .doc
            .add_table(parsed.row_count(), parsed.cols, style.as_deref())?;

        for (r, row) in parsed.rows.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                let cell = table.cell_mut(r, c)?;
                append_inline_runs(cell.paragraph_mut(), text, InlineScope::Emphasis, options);
            }
        }

        // Spacer so following text does not touch the table border.
        self.doc.add_paragraph(None)?;
        self.stats.tables += 1;
        Ok(())
    }

    /// `name` if the catalog has it, otherwise `None` (document default).
    fn available(&mut self, name: &str) -> Option<String> {
        if self.doc.has_style(name) {
            return Some(name.to_string());
        }
        debug!("style '{name}' not in catalog, using default paragraph style");
        self.stats.style_fallbacks += 1;
        None
    }

    /// Level-specific list style, then the level-1 style of the same kind,
    /// then no style at all.
    fn list_style(&mut self, kind: ListKind, level: u8) -> Option<String> {
        let wanted = kind.style_for_level(level);
        if self.doc.has_style(&wanted) {
            return Some(wanted);
        }
        self.stats.style_fallbacks += 1;

        let base = kind.base_style();
        if self.doc.has_style(base) {
            debug!("list style '{wanted}' not in catalog, falling back to '{base}'");
            return Some(base.to_string());
        }
        debug!("no '{wanted}' or '{base}' style, emitting plain paragraph");
        None
    }
}

/// Tokenizes `text` and appends one run per segment.
fn append_inline_runs(p: &mut Paragraph, text: &str, scope: InlineScope, options: &ConvertOptions) {
    for seg in tokenize(text) {
        let run = p.add_run(parsing::inline::segment_text(text, &seg));
        let InlineSegment::Styled { marker, .. } = seg else {
            continue;
        };
        run.set_bold(marker.is_bold()).set_italic(marker.is_italic());
        if scope == InlineScope::Full {
            if marker.is_code() {
                run.set_font(options.code_font.as_str());
            }
            if marker.is_strike() {
                run.set_strike(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::document::{Block, Run, Style};

    fn convert(markdown: &str) -> Document {
        convert_into(Document::new(), markdown)
    }

    fn convert_into(mut doc: Document, markdown: &str) -> Document {
        MarkdownConverter::default()
            .convert(markdown, &mut doc)
            .expect("conversion should not fail");
        doc
    }

    /// One line per block: `H<level> text`, `P[style] text` or `T rows x cols`.
    fn outline(doc: &Document) -> Vec<String> {
        doc.blocks()
            .iter()
            .map(|b| match b {
                Block::Heading { level, text } => format!("H{level} {text}"),
                Block::Paragraph(p) => format!(
                    "P[{}] {}",
                    p.style.as_deref().unwrap_or(""),
                    p.text()
                )
                .trim_end()
                .to_string(),
                Block::Table(t) => format!("T {}x{}", t.row_count(), t.col_count()),
            })
            .collect()
    }

    fn only_paragraph(doc: &Document) -> &Paragraph {
        let paragraphs: Vec<_> = doc.paragraphs().collect();
        assert_eq!(paragraphs.len(), 1, "expected one paragraph: {:?}", outline(doc));
        paragraphs[0]
    }

    fn run(text: &str) -> Run {
        Run::new(text)
    }

    fn styled(text: &str, f: impl FnOnce(&mut Run)) -> Run {
        let mut r = Run::new(text);
        f(&mut r);
        r
    }

    #[test]
    fn end_to_end_proposal_fragment() {
        let doc = convert(
            "# Title\n\
             Some **bold** and *italic* text.\n\
             - item one\n\
             - item two\n\
             | H1 | H2 |\n\
             |---|---|\n\
             | v1 | v2 |",
        );

        assert_eq!(
            outline(&doc),
            vec![
                "H1 Title",
                "P[] Some bold and italic text.",
                "P[List Bullet] item one",
                "P[List Bullet] item two",
                "T 2x2",
                "P[]",
            ]
        );

        let body = doc.blocks()[1].as_paragraph().unwrap();
        assert_eq!(
            body.runs,
            vec![
                run("Some "),
                styled("bold", |r| {
                    r.set_bold(true);
                }),
                run(" and "),
                styled("italic", |r| {
                    r.set_italic(true);
                }),
                run(" text."),
            ]
        );

        let table = doc.tables().next().unwrap();
        assert_eq!(table.texts(), vec![vec!["H1", "H2"], vec!["v1", "v2"]]);
        assert_eq!(table.style.as_deref(), Some("Table Grid"));
    }

    #[rstest]
    #[case("Just a plain sentence, nothing special.")]
    #[case("Prices from 5 to 10 (inclusive): see appendix.")]
    #[case("   indented paragraph text")]
    fn plain_line_round_trips(#[case] line: &str) {
        let doc = convert(&format!("intro\n{line}"));
        let p = doc.paragraphs().nth(1).unwrap();
        assert_eq!(p.text(), line);
        assert!(p.runs.iter().all(Run::is_plain));
    }

    #[rstest]
    #[case("**", true, false, false, false)]
    #[case("__", true, false, false, false)]
    #[case("*", false, true, false, false)]
    #[case("_", false, true, false, false)]
    #[case("***", true, true, false, false)]
    #[case("`", false, false, true, false)]
    #[case("~~", false, false, false, true)]
    fn marker_pair_becomes_three_runs(
        #[case] marker: &str,
        #[case] bold: bool,
        #[case] italic: bool,
        #[case] code: bool,
        #[case] strike: bool,
    ) {
        let doc = convert(&format!("X{marker}Y{marker}Z"));
        let p = only_paragraph(&doc);

        assert_eq!(p.runs.len(), 3);
        assert_eq!(p.text(), "XYZ");
        assert!(p.runs[0].is_plain());
        assert!(p.runs[2].is_plain());

        let y = &p.runs[1];
        assert_eq!(y.text, "Y");
        assert_eq!(y.bold, bold);
        assert_eq!(y.italic, italic);
        assert_eq!(y.strike, strike);
        assert_eq!(y.font.as_deref(), code.then_some("Courier New"));
    }

    #[test]
    fn triple_marker_is_one_bold_italic_run() {
        let doc = convert("***bold italic***");
        assert_eq!(
            only_paragraph(&doc).runs,
            vec![styled("bold italic", |r| {
                r.set_bold(true).set_italic(true);
            })]
        );
    }

    #[test]
    fn unterminated_marker_stays_literal() {
        let doc = convert("Hello *world");
        assert_eq!(only_paragraph(&doc).runs, vec![run("Hello *world")]);
    }

    #[test]
    fn code_font_comes_from_options() {
        let converter = MarkdownConverter::new(ConvertOptions {
            code_font: "Consolas".into(),
            ..ConvertOptions::default()
        });
        let mut doc = Document::new();
        converter.convert("run `cargo doc` now", &mut doc).unwrap();
        let p = only_paragraph(&doc);
        assert_eq!(p.runs[1].font.as_deref(), Some("Consolas"));
    }

    #[test]
    fn table_is_materialized_without_separator_row() {
        let doc = convert("| A | B |\n|---|---|\n| 1 | 2 |");
        let table = doc.tables().next().unwrap();
        assert_eq!(table.col_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0).unwrap().text(), "A");
        assert_eq!(table.cell(1, 1).unwrap().text(), "2");
    }

    #[test]
    fn table_closes_before_following_paragraph() {
        let doc = convert("| A | B |\n|---|---|\n| 1 | 2 |\nAfter the table.");
        assert_eq!(outline(&doc), vec!["T 2x2", "P[]", "P[] After the table."]);
    }

    #[test]
    fn table_at_end_of_input_is_flushed() {
        let doc = convert("Intro\n| a | b |\n| c | d |");
        assert_eq!(outline(&doc), vec!["P[] Intro", "T 2x2", "P[]"]);
    }

    #[test]
    fn separator_only_table_is_dropped() {
        let doc = convert("Before\n|---|---|\nAfter");
        assert_eq!(outline(&doc), vec!["P[] Before", "P[] After"]);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let doc = convert("| a | b | c |\n| d |");
        let table = doc.tables().next().unwrap();
        assert_eq!(table.texts(), vec![vec!["a", "b", "c"], vec!["d", "", ""]]);
    }

    #[test]
    fn table_cells_keep_emphasis_only() {
        let doc = convert("| **Total** | *approx* | `code` | ~~old~~ |");
        let table = doc.tables().next().unwrap();
        let runs = |c: usize| table.cell(0, c).unwrap().paragraph.runs.clone();

        assert_eq!(
            runs(0),
            vec![styled("Total", |r| {
                r.set_bold(true);
            })]
        );
        assert_eq!(
            runs(1),
            vec![styled("approx", |r| {
                r.set_italic(true);
            })]
        );
        assert_eq!(runs(2), vec![run("code")]);
        assert_eq!(runs(3), vec![run("old")]);
    }

    #[test]
    fn two_tables_separated_by_blank_line() {
        let doc = convert("| a |\n\n| b |");
        assert_eq!(outline(&doc), vec!["T 1x1", "P[]", "T 1x1", "P[]"]);
    }

    #[test]
    fn heading_level_is_clamped() {
        let doc = convert("######## Deep");
        assert_eq!(outline(&doc), vec!["H6 Deep"]);
    }

    #[test]
    fn heading_text_is_not_formatted() {
        let doc = convert("## The **Plan**");
        assert_eq!(outline(&doc), vec!["H2 The **Plan**"]);
    }

    #[test]
    fn nested_list_items_use_level_styles() {
        let doc = convert("- one\n  - two\n    - three\n      - four\n1. first\n  2. second");
        assert_eq!(
            outline(&doc),
            vec![
                "P[List Bullet] one",
                "P[List Bullet 2] two",
                "P[List Bullet 3] three",
                "P[List Bullet 3] four",
                "P[List Number] first",
                "P[List Number 2] second",
            ]
        );
    }

    #[test]
    fn list_item_text_is_formatted() {
        let doc = convert("* **Phase 1:** discovery");
        let p = only_paragraph(&doc);
        assert_eq!(p.style.as_deref(), Some("List Bullet"));
        assert_eq!(
            p.runs,
            vec![
                styled("Phase 1:", |r| {
                    r.set_bold(true);
                }),
                run(" discovery"),
            ]
        );
    }

    #[test]
    fn missing_level_style_falls_back_to_base_style() {
        let mut styles = StyleCatalog::default();
        styles.remove("List Bullet 2");
        let doc = convert_into(Document::with_styles(styles), "- top\n  - nested");
        assert_eq!(outline(&doc), vec!["P[List Bullet] top", "P[List Bullet] nested"]);
    }

    #[test]
    fn list_without_any_style_keeps_text() {
        let doc = convert_into(
            Document::with_styles(StyleCatalog::empty()),
            "- top\n      - very deep item",
        );
        assert_eq!(outline(&doc), vec!["P[] top", "P[] very deep item"]);
    }

    #[test]
    fn blank_lines_are_suppressed() {
        let doc = convert("A\n\n\nB");
        assert_eq!(outline(&doc), vec!["P[] A", "P[] B"]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let doc = convert("\n\n   \nA\n\n");
        assert_eq!(outline(&doc), vec!["P[] A"]);
    }

    #[test]
    fn crlf_line_endings() {
        let doc = convert("# Title\r\nBody\r\n");
        assert_eq!(outline(&doc), vec!["H1 Title", "P[] Body"]);
    }

    #[test]
    fn horizontal_rule_is_spaced_empty_paragraph() {
        let doc = convert("above\n---\nbelow");
        let rule = doc.paragraphs().nth(1).unwrap();
        assert!(rule.runs.is_empty());
        assert_eq!(rule.spacing, Spacing::new(6, 6));
    }

    #[test]
    fn block_quote_uses_quote_style() {
        let doc = convert("> Delivered on time, every time.");
        assert_eq!(outline(&doc), vec!["P[Quote] Delivered on time, every time."]);
    }

    #[test]
    fn block_quote_without_quote_style() {
        let mut styles = StyleCatalog::default();
        styles.remove(StyleCatalog::QUOTE);
        let doc = convert_into(Document::with_styles(styles), "> quoted");
        assert_eq!(outline(&doc), vec!["P[] quoted"]);
    }

    #[test]
    fn missing_table_style_gives_unstyled_table() {
        let mut styles = StyleCatalog::default();
        styles.remove(StyleCatalog::TABLE_GRID);
        let doc = convert_into(Document::with_styles(styles), "| a | b |");
        assert_eq!(doc.tables().next().unwrap().style, None);
    }

    #[test]
    fn form_field_line_has_tight_spacing() {
        let doc = convert("**Client:** Acme Ltd\nOrdinary line");
        let mut paragraphs = doc.paragraphs();

        let field = paragraphs.next().unwrap();
        assert_eq!(field.spacing, Spacing::new(0, 0));
        assert_eq!(
            field.runs,
            vec![
                styled("Client:", |r| {
                    r.set_bold(true);
                }),
                run(" Acme Ltd"),
            ]
        );

        let ordinary = paragraphs.next().unwrap();
        assert!(ordinary.spacing.is_default());
    }

    #[test]
    fn existing_content_is_preserved() {
        let mut doc = Document::new();
        doc.add_heading("Proposal", 0);
        let doc = convert_into(doc, "Body");
        assert_eq!(outline(&doc), vec!["H0 Proposal", "P[] Body"]);
        assert_eq!(doc.title(), Some("Proposal"));
    }

    #[test]
    fn custom_table_style_from_options() {
        let mut styles = StyleCatalog::default();
        styles.insert(Style::table("Light List"));
        let mut doc = Document::with_styles(styles);
        MarkdownConverter::new(ConvertOptions {
            table_style: "Light List".into(),
            ..ConvertOptions::default()
        })
        .convert("| x |", &mut doc)
        .unwrap();
        assert_eq!(doc.tables().next().unwrap().style.as_deref(), Some("Light List"));
    }

    #[test]
    fn empty_input_adds_nothing() {
        assert!(convert("").blocks().is_empty());
        assert!(convert("  \n\n").blocks().is_empty());
    }
}
