//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while serializing or packaging a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A worksheet relationship that no emitted cell links to
    #[error("{part}: hyperlink relationship '{relationship_id}' is not attached to any cell")]
    MissingHyperlinkCell {
        part: String,
        relationship_id: String,
    },

    /// A styled cell whose style hash is not in the style registry
    #[error("{part}: cell {cell} references a style missing from the style registry")]
    MissingStyle { part: String, cell: String },
}
