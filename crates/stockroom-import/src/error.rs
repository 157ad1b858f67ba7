//! Import error types

use thiserror::Error;

/// Result type for import setup operations
pub type ImportResult<T> = std::result::Result<T, ImportError>;

/// Errors loading import inputs
///
/// Validation findings are never errors; they are returned as
/// [`RowError`](stockroom_core::RowError) lists.
#[derive(Debug, Error)]
pub enum ImportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference data could not be decoded
    #[error("Invalid reference data: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown schema name
    #[error("Unknown schema: {0} (expected item, location or stock-movement)")]
    UnknownSchema(String),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] stockroom_csv::CsvError),
}
