//! Delimited-text table parser

use std::fs;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use crate::tokenizer::tokenize_line;
use stockroom_core::{ParseResult, ParsedRow, RowError};

/// Message for input without a header and at least one data line
pub const NO_DATA_MESSAGE: &str = "File must contain a header row and at least one data row";

/// Delimited-text table parser
pub struct CsvReader;

impl CsvReader {
    /// Parse comma-separated text, checking that every label in `required` is a header
    pub fn parse<S: AsRef<str>>(text: &str, required: &[S]) -> ParseResult {
        Self::parse_with_options(text, required, &CsvReadOptions::default())
    }

    /// Read and parse a UTF-8 file
    pub fn parse_file<P: AsRef<Path>, S: AsRef<str>>(
        path: P,
        required: &[S],
        options: &CsvReadOptions,
    ) -> CsvResult<ParseResult> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse_with_options(&text, required, options))
    }

    /// Parse delimited text into header-keyed rows
    ///
    /// Header problems (no data, missing required columns) are reported as
    /// row-1 errors and stop parsing before any data line is read.
    pub fn parse_with_options<S: AsRef<str>>(
        text: &str,
        required: &[S],
        options: &CsvReadOptions,
    ) -> ParseResult {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();

        if lines.len() < 2 {
            log::debug!("rejecting input with {} non-blank lines", lines.len());
            return ParseResult::failed(vec![RowError::new(1, NO_DATA_MESSAGE)]);
        }

        let headers: Vec<String> = tokenize_line(lines[0], options.delimiter, options.quote)
            .into_iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let missing: Vec<RowError> = required
            .iter()
            .map(|label| label.as_ref())
            .filter(|label| !headers.contains(&label.to_lowercase()))
            .map(|label| {
                RowError::in_column(1, label, format!("Missing required column: {}", label))
            })
            .collect();

        if !missing.is_empty() {
            log::debug!("header is missing {} required column(s)", missing.len());
            return ParseResult::failed(missing);
        }

        let rows: Vec<ParsedRow> = lines[1..]
            .iter()
            .map(|line| {
                let fields = tokenize_line(line, options.delimiter, options.quote)
                    .into_iter()
                    .map(|f| f.trim().to_string());
                ParsedRow::from_fields(&headers, fields)
            })
            .collect();

        log::debug!("parsed {} rows with {} columns", rows.len(), headers.len());

        ParseResult {
            rows,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
