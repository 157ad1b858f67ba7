//! # stockroom-core
//!
//! Core data model shared by the stockroom import and export crates.
//!
//! This crate provides:
//! - [`ColumnSpec`] and [`SheetColumn`] - the contract between a record field and a column
//! - [`FieldValue`] and [`Record`] - record-like rows, with absent fields read as empty
//! - [`ParsedRow`], [`ParseResult`] and [`RowError`] - the output of delimited-text import
//! - [`Sheet`] - one logical spreadsheet tab ready for encoding
//! - [`address`] - spreadsheet column letters and cell references
//!
//! ## Example
//!
//! ```rust
//! use stockroom_core::{FieldValue, Record, Sheet, SheetColumn};
//! use std::collections::BTreeMap;
//!
//! let mut item = BTreeMap::new();
//! item.insert("name".to_string(), FieldValue::from("Widget"));
//! item.insert("stock".to_string(), FieldValue::from(12));
//!
//! let columns = vec![SheetColumn::new("name", "Name"), SheetColumn::new("stock", "Stock")];
//! let sheet = Sheet::from_records("Items", columns, &[item]);
//!
//! assert_eq!(sheet.rows()[0][1], FieldValue::Integer(12));
//! assert_eq!(sheet.used_range(), "A1:B2");
//! ```

pub mod address;
pub mod column;
pub mod diagnostic;
pub mod error;
pub mod record;
pub mod sheet;
pub mod value;

// Re-exports for convenience
pub use address::{cell_reference, column_to_letters, letters_to_column, range_reference};
pub use column::{ColumnDef, ColumnSpec, SheetColumn};
pub use diagnostic::{ParseResult, RowError};
pub use error::{Error, Result};
pub use record::{ParsedRow, Record};
pub use sheet::Sheet;
pub use value::FieldValue;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
