//! Export: records to downloadable CSV or XLSX files

use stockroom_core::{ColumnDef, Record, Sheet, SheetColumn};
use stockroom_csv::CsvWriter;
use stockroom_import::Schema;
use stockroom_xlsx::{XlsxWriter, XLSX_CONTENT_TYPE};

use crate::error::Result;

/// MIME type of exported CSV text
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const DEFAULT_BASE_NAME: &str = "export";

/// A generated file, ready to hand to a download response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

fn with_extension(base: &str, extension: &str) -> String {
    let base = base.trim();
    let base = if base.is_empty() {
        DEFAULT_BASE_NAME
    } else {
        base
    };

    if base.to_lowercase().ends_with(extension) {
        base.to_string()
    } else {
        format!("{}{}", base, extension)
    }
}

/// `base` with `.xlsx` appended unless it already ends with it (any case)
pub fn workbook_filename(base: &str) -> String {
    with_extension(base, ".xlsx")
}

/// `base` with `.csv` appended unless it already ends with it (any case)
pub fn csv_filename(base: &str) -> String {
    with_extension(base, ".csv")
}

/// Serialize records as CSV
pub fn export_csv<R, C>(base: &str, records: &[R], columns: &[C]) -> Result<ExportedFile>
where
    R: Record,
    C: ColumnDef,
{
    let text = CsvWriter::write_string(records, columns)?;
    let filename = csv_filename(base);
    log::debug!("exported {} records to {}", records.len(), filename);

    Ok(ExportedFile {
        filename,
        content_type: CSV_CONTENT_TYPE,
        bytes: text.into_bytes(),
    })
}

/// Package sheets as an XLSX workbook
pub fn export_xlsx(base: &str, sheets: &[Sheet]) -> Result<ExportedFile> {
    let bytes = XlsxWriter::write_to_vec(sheets)?;
    let filename = workbook_filename(base);
    log::debug!(
        "exported {} sheet(s) to {} ({} bytes)",
        sheets.len(),
        filename,
        bytes.len()
    );

    Ok(ExportedFile {
        filename,
        content_type: XLSX_CONTENT_TYPE,
        bytes,
    })
}

/// One-sheet workbook of a schema's records, named after the schema
pub fn export_schema_xlsx<R: Record>(
    base: &str,
    schema: Schema,
    records: &[R],
) -> Result<ExportedFile> {
    let columns = schema.columns().iter().map(SheetColumn::from).collect();
    let sheet = Sheet::from_records(schema.title(), columns, records);
    export_xlsx(base, &[sheet])
}
