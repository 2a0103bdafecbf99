use std::fs;
use std::path::{Path, PathBuf};

use crate::docx::{self, DocxError};
use crate::document::Document;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not write document {path}: {source}")]
    Docx {
        path: PathBuf,
        #[source]
        source: DocxError,
    },
}

/// Read a markdown file and return its content
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Save a document as `.docx`, creating parent directories as needed
pub fn save_document(doc: &Document, path: &Path) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    docx::save(doc, path).map_err(|source| IoError::Docx {
        path: path.to_path_buf(),
        source,
    })
}

/// Output path for `input` when none is given: same stem, `.docx` extension,
/// placed in `output_dir` if set, otherwise next to the input.
pub fn default_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input
        .file_stem()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("proposal"))
        .with_extension("docx");
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
