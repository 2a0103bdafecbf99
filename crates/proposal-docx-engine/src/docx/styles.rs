//! `word/styles.xml` and `word/numbering.xml` generated from the catalog.

use crate::document::{Style, StyleCatalog, StyleKind};

use super::xml::{self, DECLARATION, NS_W};

/// Numbering instance used by bulleted list styles.
const BULLET_NUM_ID: u8 = 1;
/// Numbering instance used by numbered list styles.
const DECIMAL_NUM_ID: u8 = 2;

const BULLET_GLYPHS: [&str; 3] = ["\u{2022}", "\u{25E6}", "\u{25AA}"];

/// Heading sizes in points, by level.
const HEADING_SIZES: [u16; 6] = [16, 13, 12, 11, 11, 11];

/// Style ids are style names without whitespace (`List Bullet 2` becomes
/// `ListBullet2`).
pub fn style_id(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Numbering instance and indent level for a list style name, if it is one.
fn list_numbering(name: &str) -> Option<(u8, u8)> {
    [
        (StyleCatalog::LIST_BULLET, BULLET_NUM_ID),
        (StyleCatalog::LIST_NUMBER, DECIMAL_NUM_ID),
    ]
    .into_iter()
    .find_map(|(base, num_id)| {
        (1..=StyleCatalog::MAX_LIST_LEVEL)
            .find(|&level| StyleCatalog::list_style_name(base, level) == name)
            .map(|level| (num_id, level - 1))
    })
}

fn heading_level(name: &str) -> Option<u8> {
    (1..=StyleCatalog::MAX_HEADING_LEVEL).find(|&l| StyleCatalog::heading_style_name(l) == name)
}

pub fn styles_xml(catalog: &StyleCatalog) -> String {
    let mut out = format!(
        "{DECLARATION}\n<w:styles xmlns:w=\"{NS_W}\">\
         <w:docDefaults>\
         <w:rPrDefault><w:rPr>\
         <w:rFonts w:ascii=\"Calibri\" w:hAnsi=\"Calibri\" w:eastAsia=\"Calibri\" w:cs=\"Calibri\"/>\
         <w:sz w:val=\"22\"/><w:szCs w:val=\"22\"/>\
         </w:rPr></w:rPrDefault>\
         <w:pPrDefault><w:pPr><w:spacing w:after=\"160\" w:line=\"259\" w:lineRule=\"auto\"/></w:pPr></w:pPrDefault>\
         </w:docDefaults>"
    );
    for style in catalog.iter() {
        out.push_str(&style_element(style));
    }
    out.push_str("</w:styles>");
    out
}

fn style_element(style: &Style) -> String {
    let id = style_id(&style.name);
    let name = xml::attr(&style.name);

    if style.kind == StyleKind::Table {
        return format!(
            "<w:style w:type=\"table\" w:styleId=\"{id}\"><w:name w:val=\"{name}\"/>\
             <w:tblPr><w:tblBorders>{}</w:tblBorders>\
             <w:tblCellMar><w:left w:w=\"108\" w:type=\"dxa\"/><w:right w:w=\"108\" w:type=\"dxa\"/></w:tblCellMar>\
             </w:tblPr></w:style>",
            ["top", "left", "bottom", "right", "insideH", "insideV"]
                .map(|side| format!(
                    "<w:{side} w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>"
                ))
                .concat()
        );
    }

    if style.name == StyleCatalog::NORMAL {
        return format!(
            "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"{id}\">\
             <w:name w:val=\"{name}\"/><w:qFormat/></w:style>"
        );
    }

    let (ppr, rpr) = if style.name == StyleCatalog::TITLE {
        (
            "<w:spacing w:after=\"80\" w:line=\"240\" w:lineRule=\"auto\"/><w:contextualSpacing/>\
             <w:jc w:val=\"center\"/>"
                .to_string(),
            "<w:kern w:val=\"28\"/><w:sz w:val=\"56\"/><w:szCs w:val=\"56\"/>".to_string(),
        )
    } else if let Some(level) = heading_level(&style.name) {
        let size = xml::half_points(HEADING_SIZES[usize::from(level) - 1]);
        let before = if level == 1 { 240 } else { 40 };
        (
            format!(
                "<w:keepNext/><w:keepLines/><w:spacing w:before=\"{before}\" w:after=\"0\"/>\
                 <w:outlineLvl w:val=\"{}\"/>",
                level - 1
            ),
            format!(
                "<w:b/><w:color w:val=\"2F5496\"/><w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/>"
            ),
        )
    } else if style.name == StyleCatalog::QUOTE {
        (
            "<w:spacing w:before=\"200\"/><w:ind w:left=\"864\" w:right=\"864\"/><w:jc w:val=\"center\"/>"
                .to_string(),
            "<w:i/><w:color w:val=\"404040\"/>".to_string(),
        )
    } else if let Some((num_id, ilvl)) = list_numbering(&style.name) {
        (
            format!(
                "<w:numPr><w:ilvl w:val=\"{ilvl}\"/><w:numId w:val=\"{num_id}\"/></w:numPr>\
                 <w:contextualSpacing/>"
            ),
            String::new(),
        )
    } else {
        (String::new(), String::new())
    };

    let mut out = format!(
        "<w:style w:type=\"paragraph\" w:styleId=\"{id}\"><w:name w:val=\"{name}\"/>\
         <w:basedOn w:val=\"{}\"/><w:next w:val=\"{}\"/><w:qFormat/>",
        style_id(StyleCatalog::NORMAL),
        style_id(StyleCatalog::NORMAL),
    );
    if !ppr.is_empty() {
        out.push_str(&format!("<w:pPr>{ppr}</w:pPr>"));
    }
    if !rpr.is_empty() {
        out.push_str(&format!("<w:rPr>{rpr}</w:rPr>"));
    }
    out.push_str("</w:style>");
    out
}

pub fn numbering_xml() -> String {
    let bullet_levels: String = BULLET_GLYPHS
        .iter()
        .enumerate()
        .map(|(ilvl, glyph)| level_element(ilvl, "bullet", glyph))
        .collect();
    let decimal_levels: String = (0..usize::from(StyleCatalog::MAX_LIST_LEVEL))
        .map(|ilvl| level_element(ilvl, "decimal", &format!("%{}.", ilvl + 1)))
        .collect();

    format!(
        "{DECLARATION}\n<w:numbering xmlns:w=\"{NS_W}\">\
         <w:abstractNum w:abstractNumId=\"0\"><w:multiLevelType w:val=\"hybridMultilevel\"/>{bullet_levels}</w:abstractNum>\
         <w:abstractNum w:abstractNumId=\"1\"><w:multiLevelType w:val=\"hybridMultilevel\"/>{decimal_levels}</w:abstractNum>\
         <w:num w:numId=\"{BULLET_NUM_ID}\"><w:abstractNumId w:val=\"0\"/></w:num>\
         <w:num w:numId=\"{DECIMAL_NUM_ID}\"><w:abstractNumId w:val=\"1\"/></w:num>\
         </w:numbering>"
    )
}

fn level_element(ilvl: usize, format: &str, text: &str) -> String {
    let left = 720 * (ilvl + 1);
    format!(
        "<w:lvl w:ilvl=\"{ilvl}\"><w:start w:val=\"1\"/><w:numFmt w:val=\"{format}\"/>\
         <w:lvlText w:val=\"{}\"/><w:lvlJc w:val=\"left\"/>\
         <w:pPr><w:ind w:left=\"{left}\" w:hanging=\"360\"/></w:pPr></w:lvl>",
        xml::attr(text)
    )
}
