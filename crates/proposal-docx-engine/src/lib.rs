pub mod convert;
pub mod document;
pub mod docx;
pub mod header;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{ConvertOptions, MarkdownConverter};
pub use document::{
    Block, Cell, Document, DocumentError, Paragraph, Run, Spacing, Style, StyleCatalog, StyleKind,
    Table,
};
pub use docx::{DocxError, save, write_docx};
pub use header::{Alignment, Header, HeaderLine, Logo, LogoError, LogoFormat};
pub use io::*;
