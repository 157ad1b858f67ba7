//! Import/export schemas

use std::fmt;
use std::str::FromStr;

use stockroom_core::{ColumnSpec, Record};
use stockroom_csv::CsvWriter;

use crate::error::{ImportError, ImportResult};
use crate::validator::{
    ItemRowValidator, LocationRowValidator, RowValidator, StockMovementRowValidator,
};

/// Columns of the item schema
pub const ITEM_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::required("name", "Name"),
    ColumnSpec::optional("code", "Code"),
    ColumnSpec::optional("description", "Description"),
    ColumnSpec::optional("category", "Category"),
    ColumnSpec::optional("location", "Location"),
    ColumnSpec::optional("current_stock", "Current Stock"),
    ColumnSpec::optional("minimum_stock", "Minimum Stock"),
    ColumnSpec::optional("unit", "Unit"),
];

/// Columns of the location schema
pub const LOCATION_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::required("name", "Name"),
    ColumnSpec::required("type", "Type"),
    ColumnSpec::optional("parent", "Parent Location"),
    ColumnSpec::optional("description", "Description"),
];

/// Columns of the stock-movement schema
pub const MOVEMENT_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::required("item_code", "Item Code"),
    ColumnSpec::required("type", "Type"),
    ColumnSpec::required("quantity", "Quantity"),
    ColumnSpec::optional("reference", "Reference"),
    ColumnSpec::optional("notes", "Notes"),
];

/// The record kinds that can be imported and exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schema {
    Item,
    Location,
    StockMovement,
}

impl Schema {
    /// All schemas
    pub const ALL: [Schema; 3] = [Schema::Item, Schema::Location, Schema::StockMovement];

    /// Column specification, in template order
    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            Schema::Item => ITEM_COLUMNS,
            Schema::Location => LOCATION_COLUMNS,
            Schema::StockMovement => MOVEMENT_COLUMNS,
        }
    }

    /// Labels the header row must contain
    pub fn required_labels(self) -> Vec<&'static str> {
        self.columns()
            .iter()
            .filter(|c| c.required)
            .map(|c| &*c.label)
            .collect()
    }

    /// Row validator for this schema
    pub fn validator(self) -> &'static dyn RowValidator {
        match self {
            Schema::Item => &ItemRowValidator,
            Schema::Location => &LocationRowValidator,
            Schema::StockMovement => &StockMovementRowValidator,
        }
    }

    /// Header-only CSV users can fill in and import
    pub fn template_csv(self) -> ImportResult<String> {
        Ok(CsvWriter::write_string(&[] as &[&dyn Record], self.columns())?)
    }

    /// Human-readable plural, used as the sheet name of exports
    pub fn title(self) -> &'static str {
        match self {
            Schema::Item => "Items",
            Schema::Location => "Locations",
            Schema::StockMovement => "Stock Movements",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Schema::Item => "item",
            Schema::Location => "location",
            Schema::StockMovement => "stock-movement",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Schema {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "item" | "items" => Ok(Schema::Item),
            "location" | "locations" => Ok(Schema::Location),
            "stock-movement" | "stock-movements" | "movement" | "movements" => {
                Ok(Schema::StockMovement)
            }
            _ => Err(ImportError::UnknownSchema(s.to_string())),
        }
    }
}
