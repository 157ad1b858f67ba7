//! Whole-file import: parse, then validate every row

use serde::Serialize;
use stockroom_core::{ParseResult, ParsedRow, RowError};
use stockroom_csv::CsvReader;

use crate::reference::ReferenceData;
use crate::schema::Schema;

/// Outcome of importing one delimited-text file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Parsed rows (empty when the header was rejected)
    pub rows: Vec<ParsedRow>,
    /// Structural errors followed by row errors, in row order
    pub errors: Vec<RowError>,
    pub warnings: Vec<String>,
}

impl ImportReport {
    /// True when no structural or row error was found
    pub fn is_accepted(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of distinct rows carrying at least one error
    pub fn rejected_row_count(&self) -> usize {
        let mut rows: Vec<usize> = self.errors.iter().map(|e| e.row).collect();
        rows.dedup();
        rows.len()
    }

    /// The rows, if the batch may be persisted; otherwise every diagnostic
    pub fn into_accepted(self) -> Result<Vec<ParsedRow>, Vec<RowError>> {
        if self.errors.is_empty() {
            Ok(self.rows)
        } else {
            Err(self.errors)
        }
    }
}

/// Validate every parsed row, collecting all diagnostics
pub fn validate_rows(parsed: &ParseResult, schema: Schema, refs: &ReferenceData) -> Vec<RowError> {
    let validator = schema.validator();
    parsed
        .numbered_rows()
        .flat_map(|(number, row)| {
            let errors = validator.validate(row, number, refs);
            if !errors.is_empty() {
                log::trace!("{} row {}: {} error(s)", schema, number, errors.len());
            }
            errors
        })
        .collect()
}

/// Parse `text` with the schema's required columns and validate each row
///
/// Rows are only validated when the header passed; header errors are
/// returned on their own.
pub fn import_table(text: &str, schema: Schema, refs: &ReferenceData) -> ImportReport {
    let parsed = CsvReader::parse(text, &schema.required_labels());

    if parsed.has_errors() {
        log::debug!("{} import rejected at header stage", schema);
        return ImportReport {
            rows: Vec::new(),
            errors: parsed.errors,
            warnings: parsed.warnings,
        };
    }

    let errors = validate_rows(&parsed, schema, refs);
    log::debug!(
        "{} import: {} rows, {} errors",
        schema,
        parsed.rows.len(),
        errors.len()
    );

    ImportReport {
        rows: parsed.rows,
        errors,
        warnings: parsed.warnings,
    }
}
