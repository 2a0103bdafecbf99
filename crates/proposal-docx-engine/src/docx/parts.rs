//! Package plumbing: content types, relationships, header and core properties.

use crate::header::{Alignment, Header, HeaderLine, Logo, LogoFormat};

use super::xml::{self, DECLARATION, NS_R, NS_W};

const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_NUMBERING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
const REL_HEADER: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// Relationship id of the header part in `document.xml.rels`.
pub const HEADER_REL_ID: &str = "rId3";
/// Relationship id of the logo in `header1.xml.rels`.
pub const LOGO_REL_ID: &str = "rId1";

/// English Metric Units per inch, the unit of drawing extents.
const EMU_PER_INCH: u64 = 914_400;
/// Logo height, three quarters of an inch.
const LOGO_HEIGHT: u64 = EMU_PER_INCH * 3 / 4;
/// Logo width limit: the 1.5" logo column less its cell margins.
const LOGO_MAX_WIDTH: u64 = EMU_PER_INCH * 135 / 100;

/// Header table columns in twips: 1.5" for the logo, 5" for the lines.
const LOGO_COLUMN: u32 = 2160;
const LINES_COLUMN: u32 = 7200;

/// Package path of the logo part, relative to the package root.
pub fn logo_part(format: LogoFormat) -> String {
    format!("word/media/logo.{}", format.extension())
}

pub fn content_types(has_header: bool, logo: Option<LogoFormat>) -> String {
    let header = if has_header {
        r#"<Override PartName="/word/header1.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml"/>"#
    } else {
        ""
    };
    let image = logo
        .map(|f| {
            format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                f.extension(),
                f.content_type()
            )
        })
        .unwrap_or_default();
    format!(
        r#"{DECLARATION}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  {image}
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  {header}
</Types>"#
    )
}

pub fn package_rels() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#
}

pub fn document_rels(has_header: bool) -> String {
    let header = if has_header {
        format!(r#"<Relationship Id="{HEADER_REL_ID}" Type="{REL_HEADER}" Target="header1.xml"/>"#)
    } else {
        String::new()
    };
    format!(
        r#"{DECLARATION}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{REL_STYLES}" Target="styles.xml"/>
  <Relationship Id="rId2" Type="{REL_NUMBERING}" Target="numbering.xml"/>
  {header}
</Relationships>"#
    )
}

/// Relationships of `header1.xml`: just the logo image.
pub fn header_rels(format: LogoFormat) -> String {
    format!(
        r#"{DECLARATION}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="{LOGO_REL_ID}" Type="{REL_IMAGE}" Target="media/logo.{}"/>
</Relationships>"#,
        format.extension()
    )
}

pub fn core_props(title: Option<&str>) -> String {
    let title = title
        .map(|t| format!("<dc:title>{}</dc:title>", xml::text(t)))
        .unwrap_or_default();
    format!(
        r#"{DECLARATION}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">{title}<dc:creator>{}</dc:creator></cp:coreProperties>"#,
        env!("CARGO_PKG_NAME")
    )
}

fn justification(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

/// One tightly spaced paragraph per header line. A logo moves the lines
/// into the right column of a borderless two column table.
pub fn header_xml(header: &Header) -> String {
    let jc = justification(header.alignment);
    let lines: String = header.lines.iter().map(|line| header_line(line, jc)).collect();
    let content = match &header.logo {
        Some(logo) => logo_table(logo, &lines),
        None => lines,
    };
    format!(
        "{DECLARATION}\n<w:hdr xmlns:w=\"{NS_W}\" xmlns:r=\"{NS_R}\" xmlns:wp=\"{NS_WP}\" \
         xmlns:a=\"{NS_A}\" xmlns:pic=\"{NS_PIC}\">{content}</w:hdr>"
    )
}

fn header_line(line: &HeaderLine, jc: &str) -> String {
    let size = xml::half_points(line.size_pt);
    let bold = if line.bold { "<w:b/>" } else { "" };
    format!(
        "<w:p><w:pPr><w:spacing w:before=\"0\" w:after=\"0\"/><w:jc w:val=\"{jc}\"/></w:pPr>\
         <w:r><w:rPr>{bold}<w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/></w:rPr>\
         <w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
        xml::text(&line.text)
    )
}

/// A table cell must end with a paragraph, so an empty lines column still
/// gets one.
fn logo_table(logo: &Logo, lines: &str) -> String {
    let lines = if lines.is_empty() { "<w:p/>" } else { lines };
    let cell = |width: u32, content: &str| {
        format!("<w:tc><w:tcPr><w:tcW w:w=\"{width}\" w:type=\"dxa\"/><w:vAlign w:val=\"center\"/></w:tcPr>{content}</w:tc>")
    };
    format!(
        "<w:tbl><w:tblPr><w:tblW w:w=\"{}\" w:type=\"dxa\"/><w:tblLayout w:type=\"fixed\"/>\
         <w:tblLook w:val=\"0000\"/></w:tblPr>\
         <w:tblGrid><w:gridCol w:w=\"{LOGO_COLUMN}\"/><w:gridCol w:w=\"{LINES_COLUMN}\"/></w:tblGrid>\
         <w:tr>{}{}</w:tr></w:tbl><w:p/>",
        LOGO_COLUMN + LINES_COLUMN,
        cell(LOGO_COLUMN, &format!("<w:p>{}</w:p>", drawing(logo))),
        cell(LINES_COLUMN, lines),
    )
}

/// Drawn at a fixed height with the aspect ratio kept, shrunk to fit the
/// logo column when it is too wide.
fn logo_extent(logo: &Logo) -> (u64, u64) {
    let (w, h) = logo.dimensions();
    let (w, h) = (u64::from(w), u64::from(h));
    let cx = LOGO_HEIGHT * w / h;
    if cx > LOGO_MAX_WIDTH {
        (LOGO_MAX_WIDTH, LOGO_MAX_WIDTH * h / w)
    } else {
        (cx, LOGO_HEIGHT)
    }
}

fn drawing(logo: &Logo) -> String {
    let (cx, cy) = logo_extent(logo);
    let name = format!("logo.{}", logo.format().extension());
    format!(
        "<w:r><w:drawing><wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">\
         <wp:extent cx=\"{cx}\" cy=\"{cy}\"/><wp:docPr id=\"1\" name=\"Logo\"/>\
         <wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect=\"1\"/></wp:cNvGraphicFramePr>\
         <a:graphic><a:graphicData uri=\"{NS_PIC}\"><pic:pic>\
         <pic:nvPicPr><pic:cNvPr id=\"0\" name=\"{name}\"/><pic:cNvPicPr/></pic:nvPicPr>\
         <pic:blipFill><a:blip r:embed=\"{LOGO_REL_ID}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>\
         <pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr>\
         </pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r>"
    )
}
