//! `word/document.xml`: the body blocks followed by the section properties.

use crate::document::{Block, Document, Paragraph, Run, StyleCatalog, Table};

use super::parts::HEADER_REL_ID;
use super::styles::style_id;
use super::xml::{self, DECLARATION, NS_R, NS_W};

/// US Letter, one inch margins, all in twips.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;
const MARGIN: u32 = 1440;
const TEXT_WIDTH: u32 = PAGE_WIDTH - 2 * MARGIN;

pub fn document_xml(doc: &Document, has_header: bool) -> String {
    let mut body = String::new();
    for block in doc.blocks() {
        match block {
            Block::Heading { level, text } => body.push_str(&heading(doc, *level, text)),
            Block::Paragraph(p) => body.push_str(&paragraph(p)),
            Block::Table(t) => body.push_str(&table(t)),
        }
    }
    body.push_str(&section(has_header));

    format!(
        "{DECLARATION}\n<w:document xmlns:w=\"{NS_W}\" xmlns:r=\"{NS_R}\"><w:body>{body}</w:body></w:document>"
    )
}

/// Heading styles missing from the catalog are left off; the text still
/// appears as a plain paragraph. The level 0 title is centered either way.
fn heading(doc: &Document, level: u8, text: &str) -> String {
    let name = StyleCatalog::heading_style_name(level);
    let mut ppr = String::new();
    if doc.has_style(&name) {
        ppr.push_str(&format!("<w:pStyle w:val=\"{}\"/>", style_id(&name)));
    }
    if level == 0 {
        ppr.push_str("<w:jc w:val=\"center\"/>");
    }
    let ppr = if ppr.is_empty() {
        ppr
    } else {
        format!("<w:pPr>{ppr}</w:pPr>")
    };
    let run = if text.is_empty() {
        String::new()
    } else {
        run_xml(&Run::new(text))
    };
    format!("<w:p>{ppr}{run}</w:p>")
}

fn paragraph(p: &Paragraph) -> String {
    let mut ppr = String::new();
    if let Some(style) = &p.style {
        ppr.push_str(&format!("<w:pStyle w:val=\"{}\"/>", style_id(style)));
    }
    if !p.spacing.is_default() {
        ppr.push_str("<w:spacing");
        if let Some(before) = p.spacing.before_pt {
            ppr.push_str(&format!(" w:before=\"{}\"", xml::twips(before)));
        }
        if let Some(after) = p.spacing.after_pt {
            ppr.push_str(&format!(" w:after=\"{}\"", xml::twips(after)));
        }
        ppr.push_str("/>");
    }

    let mut out = String::from("<w:p>");
    if !ppr.is_empty() {
        out.push_str(&format!("<w:pPr>{ppr}</w:pPr>"));
    }
    for run in p.runs.iter().filter(|r| !r.text.is_empty()) {
        out.push_str(&run_xml(run));
    }
    out.push_str("</w:p>");
    out
}

fn run_xml(run: &Run) -> String {
    let mut rpr = String::new();
    if let Some(font) = &run.font {
        let font = xml::attr(font);
        rpr.push_str(&format!(
            "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>"
        ));
    }
    if run.bold {
        rpr.push_str("<w:b/>");
    }
    if run.italic {
        rpr.push_str("<w:i/>");
    }
    if run.strike {
        rpr.push_str("<w:strike/>");
    }

    let rpr = if rpr.is_empty() {
        rpr
    } else {
        format!("<w:rPr>{rpr}</w:rPr>")
    };
    format!("<w:r>{rpr}{}</w:r>", run_content(&run.text))
}

/// Line breaks and tabs are run content of their own, not `w:t` text.
fn run_content(text: &str) -> String {
    let mut out = String::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        let tag = match c {
            '\n' => "<w:br/>",
            '\t' => "<w:tab/>",
            _ => continue,
        };
        push_text(&mut out, &text[start..i]);
        out.push_str(tag);
        start = i + c.len_utf8();
    }
    push_text(&mut out, &text[start..]);
    out
}

fn push_text(out: &mut String, s: &str) {
    if !s.is_empty() {
        out.push_str(&format!("<w:t xml:space=\"preserve\">{}</w:t>", xml::text(s)));
    }
}

/// Columns share the text width evenly.
fn table(t: &Table) -> String {
    let cols = t.col_count().max(1);
    let width = TEXT_WIDTH / cols as u32;

    let style = t
        .style
        .as_deref()
        .map(|s| format!("<w:tblStyle w:val=\"{}\"/>", style_id(s)))
        .unwrap_or_default();
    let grid = format!("<w:gridCol w:w=\"{width}\"/>").repeat(cols);

    let mut out = format!(
        "<w:tbl><w:tblPr>{style}<w:tblW w:w=\"0\" w:type=\"auto\"/>\
         <w:tblLook w:val=\"04A0\" w:firstRow=\"1\" w:lastRow=\"0\" w:firstColumn=\"1\" w:lastColumn=\"0\" w:noHBand=\"0\" w:noVBand=\"1\"/>\
         </w:tblPr><w:tblGrid>{grid}</w:tblGrid>"
    );
    for row in t.rows() {
        out.push_str("<w:tr>");
        for cell in row {
            out.push_str(&format!(
                "<w:tc><w:tcPr><w:tcW w:w=\"{width}\" w:type=\"dxa\"/></w:tcPr>{}</w:tc>",
                paragraph(&cell.paragraph)
            ));
        }
        out.push_str("</w:tr>");
    }
    out.push_str("</w:tbl>");
    out
}

fn section(has_header: bool) -> String {
    let header = if has_header {
        format!("<w:headerReference w:type=\"default\" r:id=\"{HEADER_REL_ID}\"/>")
    } else {
        String::new()
    };
    format!(
        "<w:sectPr>{header}<w:pgSz w:w=\"{PAGE_WIDTH}\" w:h=\"{PAGE_HEIGHT}\"/>\
         <w:pgMar w:top=\"{MARGIN}\" w:right=\"{MARGIN}\" w:bottom=\"{MARGIN}\" w:left=\"{MARGIN}\" \
         w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/></w:sectPr>"
    )
}
