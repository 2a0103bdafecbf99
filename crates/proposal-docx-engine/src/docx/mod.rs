//! # DOCX Output
//!
//! Serializes a [`Document`] as a WordprocessingML package: a zip archive of
//! XML parts that word processors open as a `.docx` file.
//!
//! ## Parts
//!
//! | Part | Source |
//! |------|--------|
//! | `[Content_Types].xml`, `_rels/.rels` | fixed, plus optional parts present |
//! | `word/document.xml` | `body`: headings, paragraphs, tables, section |
//! | `word/styles.xml`, `word/numbering.xml` | `styles`: the style catalog |
//! | `word/header1.xml` | `parts`: the page header, when set |
//! | `word/_rels/header1.xml.rels`, `word/media/logo.*` | `parts`: the header logo, when set |
//! | `docProps/core.xml` | `parts`: title metadata |

mod body;
mod parts;
mod styles;
mod xml;

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::debug;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::document::Document;

pub use styles::style_id;

#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Part names inside the package.
pub struct PartName;

impl PartName {
    pub const CONTENT_TYPES: &'static str = "[Content_Types].xml";
    pub const PACKAGE_RELS: &'static str = "_rels/.rels";
    pub const DOCUMENT: &'static str = "word/document.xml";
    pub const DOCUMENT_RELS: &'static str = "word/_rels/document.xml.rels";
    pub const STYLES: &'static str = "word/styles.xml";
    pub const NUMBERING: &'static str = "word/numbering.xml";
    pub const HEADER: &'static str = "word/header1.xml";
    pub const HEADER_RELS: &'static str = "word/_rels/header1.xml.rels";
    pub const CORE_PROPS: &'static str = "docProps/core.xml";
}

/// Writes `doc` as a `.docx` package and returns the writer.
pub fn write_docx<W: Write + Seek>(doc: &Document, writer: W) -> Result<W, DocxError> {
    let header = doc.header().filter(|h| !h.is_empty());
    let has_header = header.is_some();
    let logo = header.and_then(|h| h.logo.as_ref());

    let mut zip = ZipWriter::new(writer);
    let opt = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut add = |name: &str, content: &[u8]| -> Result<(), DocxError> {
        zip.start_file(name, opt)?;
        zip.write_all(content)?;
        Ok(())
    };

    add(
        PartName::CONTENT_TYPES,
        parts::content_types(has_header, logo.map(|l| l.format())).as_bytes(),
    )?;
    add(PartName::PACKAGE_RELS, parts::package_rels().as_bytes())?;
    add(PartName::CORE_PROPS, parts::core_props(doc.title()).as_bytes())?;
    add(PartName::DOCUMENT, body::document_xml(doc, has_header).as_bytes())?;
    add(PartName::DOCUMENT_RELS, parts::document_rels(has_header).as_bytes())?;
    add(PartName::STYLES, styles::styles_xml(doc.styles()).as_bytes())?;
    add(PartName::NUMBERING, styles::numbering_xml().as_bytes())?;
    if let Some(header) = header {
        add(PartName::HEADER, parts::header_xml(header).as_bytes())?;
    }
    if let Some(logo) = logo {
        add(PartName::HEADER_RELS, parts::header_rels(logo.format()).as_bytes())?;
        add(&parts::logo_part(logo.format()), logo.data())?;
    }

    let writer = zip.finish()?;
    debug!(
        "wrote docx package: {} blocks, header: {has_header}, logo: {}",
        doc.blocks().len(),
        logo.is_some()
    );
    Ok(writer)
}

/// Writes `doc` to `path`, replacing any existing file.
pub fn save(doc: &Document, path: &Path) -> Result<(), DocxError> {
    let file = File::create(path)?;
    write_docx(doc, file)?;
    Ok(())
}
