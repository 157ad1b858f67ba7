//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while writing a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A workbook needs at least one sheet
    #[error("Workbook has no sheets")]
    EmptyWorkbook,

    /// Sheet exceeds the worksheet grid
    #[error("Sheet '{sheet}' is too large: {message}")]
    SheetTooLarge { sheet: String, message: String },

    /// Core error (sheet names)
    #[error("Core error: {0}")]
    Core(#[from] stockroom_core::Error),
}
