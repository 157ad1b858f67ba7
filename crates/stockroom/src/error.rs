//! Error type for the stockroom facade

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from export and import setup
#[derive(Debug, Error)]
pub enum Error {
    /// CSV error
    #[error(transparent)]
    Csv(#[from] stockroom_csv::CsvError),

    /// XLSX error
    #[error(transparent)]
    Xlsx(#[from] stockroom_xlsx::XlsxError),

    /// Import setup error
    #[error(transparent)]
    Import(#[from] stockroom_import::ImportError),
}
