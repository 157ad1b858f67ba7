//! Logical spreadsheet tabs

use crate::address::range_reference;
use crate::column::{ColumnDef, SheetColumn};
use crate::record::Record;
use crate::value::FieldValue;

/// One tab of an exported workbook
///
/// Rows are projected through the columns when they are added, so every row
/// has exactly one value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    columns: Vec<SheetColumn>,
    rows: Vec<Vec<FieldValue>>,
}

impl Sheet {
    /// Create an empty sheet
    pub fn new<S: Into<String>>(name: S, columns: Vec<SheetColumn>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a sheet and fill it from record-like rows
    pub fn from_records<S, R>(name: S, columns: Vec<SheetColumn>, records: &[R]) -> Self
    where
        S: Into<String>,
        R: Record,
    {
        let mut sheet = Self::new(name, columns);
        for record in records {
            sheet.push_record(record);
        }
        sheet
    }

    /// Append a row read from a record, one value per column key
    pub fn push_record<R: Record + ?Sized>(&mut self, record: &R) {
        let row = self.columns.iter().map(|c| record.field(c.key())).collect();
        self.rows.push(row);
    }

    /// Append a row of values, padded with empties or truncated to the column count
    pub fn push_values(&mut self, mut values: Vec<FieldValue>) {
        values.resize(self.columns.len(), FieldValue::Empty);
        self.rows.push(values);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[SheetColumn] {
        &self.columns
    }

    /// Data rows (without the header row)
    pub fn rows(&self) -> &[Vec<FieldValue>] {
        &self.rows
    }

    /// Used range including the header row, e.g. `A1:C11`
    ///
    /// A sheet without columns reports `A1`.
    pub fn used_range(&self) -> String {
        match self.columns.len() {
            0 => "A1".to_string(),
            n => range_reference((0, 0), (self.rows.len() as u32, n as u32 - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn columns() -> Vec<SheetColumn> {
        vec![
            SheetColumn::new("name", "Name"),
            SheetColumn::new("qty", "Quantity"),
        ]
    }

    #[test]
    fn test_from_records_projects_columns() {
        let mut rec = HashMap::new();
        rec.insert("name".to_string(), FieldValue::from("Bolt"));
        rec.insert("ignored".to_string(), FieldValue::from("x"));

        let sheet = Sheet::from_records("Items", columns(), &[rec]);
        assert_eq!(sheet.name(), "Items");
        assert_eq!(
            sheet.rows()[0],
            vec![FieldValue::from("Bolt"), FieldValue::Empty]
        );
    }

    #[test]
    fn test_used_range() {
        let mut sheet = Sheet::new("Items", columns());
        assert_eq!(sheet.used_range(), "A1:B1");
        sheet.push_values(vec![FieldValue::from("a")]);
        sheet.push_values(vec![FieldValue::from("b"), 1.into(), 2.into()]);
        assert_eq!(sheet.used_range(), "A1:B3");
        assert_eq!(sheet.rows()[0].len(), 2);
        assert_eq!(sheet.rows()[1].len(), 2);

        assert_eq!(Sheet::new("Empty", Vec::new()).used_range(), "A1");
    }
}
