//! # stockroom-import
//!
//! Validation of parsed delimited-text rows against the inventory schemas.
//!
//! Each [`Schema`] (items, locations, stock movements) has a [`RowValidator`]
//! that checks one [`ParsedRow`](stockroom_core::ParsedRow) against the
//! reference data supplied by the caller and returns every problem it finds.
//! [`import_table`] runs parsing and validation over a whole text blob.
//!
//! ```rust
//! use stockroom_import::{import_table, ReferenceData, Schema};
//!
//! let refs = ReferenceData::default().with_categories(["Tools"]);
//! let report = import_table("Name,Category\nHammer,tools\n", Schema::Item, &refs);
//! assert!(report.is_accepted());
//! ```

mod batch;
mod error;
mod reference;
mod schema;
mod validator;

pub use batch::{import_table, validate_rows, ImportReport};
pub use error::{ImportError, ImportResult};
pub use reference::{NameSet, ReferenceData};
pub use schema::{Schema, ITEM_COLUMNS, LOCATION_COLUMNS, MOVEMENT_COLUMNS};
pub use validator::{
    ItemRowValidator, LocationRowValidator, RowValidator, StockMovementRowValidator,
};
