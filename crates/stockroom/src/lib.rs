//! # stockroom
//!
//! Tabular import and export for inventory data: items, storage locations and
//! stock movements.
//!
//! ## Features
//!
//! - Parse comma-separated text into header-keyed rows
//! - Validate rows against the item, location and stock-movement schemas,
//!   collecting every problem per row
//! - Serialize records back to CSV
//! - Package records as a minimal XLSX workbook
//!
//! ## Example
//!
//! ```rust
//! use stockroom::prelude::*;
//!
//! let refs = ReferenceData::default()
//!     .with_item_codes(["HAM-01"])
//!     .with_transaction_types(["in", "out"]);
//!
//! let text = "Item Code,Type,Quantity\nHAM-01,in,5\nHAM-02,out,0\n";
//! let report = import_table(text, Schema::StockMovement, &refs);
//!
//! assert_eq!(report.rows.len(), 2);
//! assert_eq!(report.errors.len(), 2);
//! for error in &report.errors {
//!     println!("{}", error);
//! }
//! ```

pub mod error;
pub mod export;
pub mod import;
pub mod prelude;

pub use error::{Error, Result};

// Re-export core types
pub use stockroom_core::{
    cell_reference, column_to_letters, letters_to_column, range_reference, ColumnDef, ColumnSpec,
    FieldValue, ParseResult, ParsedRow, Record, RowError, Sheet, SheetColumn, MAX_COLS, MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export I/O types
pub use stockroom_csv::{
    tokenize_line, CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};
pub use stockroom_xlsx::{XlsxError, XlsxWriter};
