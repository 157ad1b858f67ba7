//! Prelude module - common imports for stockroom users
//!
//! ```rust
//! use stockroom::prelude::*;
//! ```

pub use crate::export::{csv_filename, export_csv, export_xlsx, workbook_filename, ExportedFile};
pub use crate::import::{import_table, ImportReport, ReferenceData, RowValidator, Schema};
pub use crate::{
    ColumnDef, ColumnSpec, CsvReader, CsvWriter, Error, FieldValue, ParseResult, ParsedRow,
    Record, Result, RowError, Sheet, SheetColumn, XlsxWriter,
};
