//! Export of generated documents
//!
//! Documents leave the library verbatim: no encoding transformation, no
//! formatting. Both export paths refuse an empty document before touching the
//! writer or the filesystem.

use std::fs;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

/// Suggested file name for saved documents
pub const SUGGESTED_FILENAME: &str = "custom.tdl";

/// MIME type of exported documents
pub const MIME_TYPE: &str = "text/plain";

/// Errors that can occur while exporting a document
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was requested before any document was generated
    #[error("no document to export")]
    EmptyDocument,

    /// Error writing the document
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Write a document verbatim to a writer
///
/// Stands in for the clipboard of a UI surface.
pub fn copy_to(document: &str, writer: &mut impl Write) -> Result<(), ExportError> {
    if document.is_empty() {
        return Err(ExportError::EmptyDocument);
    }
    writer.write_all(document.as_bytes())?;
    Ok(())
}

/// Write a document verbatim to a file
///
/// Stands in for the file download of a UI surface.
pub fn write_to_file(document: &str, path: &Path) -> Result<(), ExportError> {
    if document.is_empty() {
        return Err(ExportError::EmptyDocument);
    }
    fs::write(path, document)?;
    Ok(())
}
