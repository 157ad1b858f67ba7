//! # stockroom-xlsx
//!
//! Writes [`Sheet`](stockroom_core::Sheet)s as a minimal XLSX package: one
//! worksheet part per sheet, inline-string text cells and bare numeric cells,
//! no styles.
//!
//! ```rust
//! use stockroom_core::{FieldValue, Sheet, SheetColumn};
//! use stockroom_xlsx::XlsxWriter;
//!
//! let mut sheet = Sheet::new("Items", vec![SheetColumn::new("name", "Name")]);
//! sheet.push_values(vec![FieldValue::from("Widget")]);
//!
//! let bytes = XlsxWriter::write_to_vec(&[sheet]).unwrap();
//! assert_eq!(&bytes[..2], b"PK");
//! ```

pub mod error;
pub mod sheet;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use sheet::sheet_xml;
pub use writer::XlsxWriter;

/// MIME type of an XLSX workbook
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
