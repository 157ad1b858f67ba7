//! Per-schema row validators
//!
//! Validators never stop at the first problem: every failed check on a row
//! adds its own [`RowError`], in column order.

use stockroom_core::{ParsedRow, RowError};

use crate::reference::ReferenceData;
use crate::schema::Schema;

/// Checks one parsed row of a schema against reference data
pub trait RowValidator: Send + Sync {
    /// Schema the validator belongs to
    fn schema(&self) -> Schema;

    /// Every problem found in `row`; empty when the row is acceptable
    ///
    /// `row_number` is the 1-based row the diagnostics are anchored to.
    fn validate(&self, row: &ParsedRow, row_number: usize, refs: &ReferenceData)
        -> Vec<RowError>;
}

/// Item rows: `Name` required, category/location must exist, stock levels are integers
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemRowValidator;

/// Location rows: `Name` and `Type` required, type from the enumeration, parent must exist
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationRowValidator;

/// Stock-movement rows: known item code, valid type, positive integer quantity
#[derive(Debug, Clone, Copy, Default)]
pub struct StockMovementRowValidator;

fn require(errors: &mut Vec<RowError>, row: &ParsedRow, row_number: usize, label: &str) {
    if row.non_blank(label).is_none() {
        errors.push(RowError::in_column(
            row_number,
            label,
            format!("{} is required", label),
        ));
    }
}

fn is_integer(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

impl RowValidator for ItemRowValidator {
    fn schema(&self) -> Schema {
        Schema::Item
    }

    fn validate(
        &self,
        row: &ParsedRow,
        row_number: usize,
        refs: &ReferenceData,
    ) -> Vec<RowError> {
        let mut errors = Vec::new();

        require(&mut errors, row, row_number, "Name");

        if let Some(category) = row.non_blank("Category") {
            if !refs.categories.contains(category) {
                errors.push(RowError::in_column(
                    row_number,
                    "Category",
                    format!("Category \"{}\" not found", category),
                ));
            }
        }

        if let Some(location) = row.non_blank("Location") {
            if !refs.locations.contains(location) {
                errors.push(RowError::in_column(
                    row_number,
                    "Location",
                    format!("Location \"{}\" not found", location),
                ));
            }
        }

        for label in ["Current Stock", "Minimum Stock"] {
            if let Some(value) = row.non_blank(label) {
                if !is_integer(value) {
                    errors.push(RowError::in_column(
                        row_number,
                        label,
                        format!("{} must be a whole number, got \"{}\"", label, value),
                    ));
                }
            }
        }

        errors
    }
}

impl RowValidator for LocationRowValidator {
    fn schema(&self) -> Schema {
        Schema::Location
    }

    fn validate(
        &self,
        row: &ParsedRow,
        row_number: usize,
        refs: &ReferenceData,
    ) -> Vec<RowError> {
        let mut errors = Vec::new();

        require(&mut errors, row, row_number, "Name");

        match row.non_blank("Type") {
            None => require(&mut errors, row, row_number, "Type"),
            Some(kind) if !refs.location_types.contains(kind) => {
                errors.push(RowError::in_column(
                    row_number,
                    "Type",
                    format!(
                        "Invalid location type \"{}\". Valid types: {}",
                        kind,
                        refs.location_types.display_list()
                    ),
                ));
            }
            Some(_) => {}
        }

        if let Some(parent) = row.non_blank("Parent Location") {
            if !refs.locations.contains(parent) {
                errors.push(RowError::in_column(
                    row_number,
                    "Parent Location",
                    format!("Parent location \"{}\" not found", parent),
                ));
            }
        }

        errors
    }
}

impl RowValidator for StockMovementRowValidator {
    fn schema(&self) -> Schema {
        Schema::StockMovement
    }

    fn validate(
        &self,
        row: &ParsedRow,
        row_number: usize,
        refs: &ReferenceData,
    ) -> Vec<RowError> {
        let mut errors = Vec::new();

        match row.non_blank("Item Code") {
            None => errors.push(RowError::in_column(
                row_number,
                "Item Code",
                "Item code is required",
            )),
            Some(code) if !refs.item_codes.contains(code) => {
                errors.push(RowError::in_column(
                    row_number,
                    "Item Code",
                    format!("Item code \"{}\" not found", code),
                ));
            }
            Some(_) => {}
        }

        match row.non_blank("Type") {
            None => require(&mut errors, row, row_number, "Type"),
            Some(kind) if !refs.transaction_types.contains(kind) => {
                errors.push(RowError::in_column(
                    row_number,
                    "Type",
                    format!(
                        "Invalid transaction type \"{}\". Valid types: {}",
                        kind,
                        refs.transaction_types.display_list()
                    ),
                ));
            }
            Some(_) => {}
        }

        let quantity = row
            .non_blank("Quantity")
            .and_then(|q| q.parse::<i64>().ok());
        if !matches!(quantity, Some(q) if q > 0) {
            errors.push(RowError::in_column(
                row_number,
                "Quantity",
                "Quantity must be a positive whole number",
            ));
        }

        errors
    }
}
