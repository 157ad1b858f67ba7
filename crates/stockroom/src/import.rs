//! Import: parse delimited text and validate it against a schema
//!
//! The persistence layer supplies [`ReferenceData`] and should only store rows
//! from a report whose [`ImportReport::into_accepted`] succeeds.

pub use stockroom_import::{
    import_table, validate_rows, ImportError, ImportReport, ImportResult, ItemRowValidator,
    LocationRowValidator, NameSet, ReferenceData, RowValidator, Schema,
    StockMovementRowValidator, ITEM_COLUMNS, LOCATION_COLUMNS, MOVEMENT_COLUMNS,
};
