//! Import diagnostics

use std::fmt;

use crate::record::ParsedRow;

/// One problem found while parsing or validating a row
///
/// `row` is 1-based and counts the header as row 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowError {
    /// 1-based row number (header = 1)
    pub row: usize,
    /// Display label of the offending column, if the problem is column-scoped
    pub column: Option<String>,
    /// Human-readable description
    pub message: String,
}

impl RowError {
    /// A row-scoped error
    pub fn new<M: Into<String>>(row: usize, message: M) -> Self {
        Self {
            row,
            column: None,
            message: message.into(),
        }
    }

    /// An error about one column of a row
    pub fn in_column<C: Into<String>, M: Into<String>>(row: usize, column: C, message: M) -> Self {
        Self {
            row,
            column: Some(column.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.column {
            Some(column) => write!(f, "Row {} ({}): {}", self.row, column, self.message),
            None => write!(f, "Row {}: {}", self.row, self.message),
        }
    }
}

/// Output of parsing delimited text
///
/// When `errors` holds header-stage failures, `rows` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    pub rows: Vec<ParsedRow>,
    pub errors: Vec<RowError>,
    /// Non-fatal observations
    pub warnings: Vec<String>,
}

impl ParseResult {
    /// A result holding only structural errors
    pub fn failed(errors: Vec<RowError>) -> Self {
        Self {
            rows: Vec::new(),
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Rows paired with their 1-based row numbers (first data row = 2)
    pub fn numbered_rows(&self) -> impl Iterator<Item = (usize, &ParsedRow)> {
        self.rows.iter().enumerate().map(|(i, row)| (i + 2, row))
    }
}
