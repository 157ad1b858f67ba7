//! Column specifications
//!
//! A column ties a record field (`key`) to the label shown in a header row.
//! [`ColumnSpec`] additionally carries whether an import must provide the column;
//! [`SheetColumn`] is the export-only form used for spreadsheet tabs.

use std::borrow::Cow;

/// Common accessors for anything that maps a record field to a header label
pub trait ColumnDef {
    /// Record field the column reads from
    fn key(&self) -> &str;
    /// Header text for the column
    fn label(&self) -> &str;
}

/// A column of a delimited-text schema
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSpec {
    /// Record field name
    pub key: Cow<'static, str>,
    /// Display label, used as the header text
    pub label: Cow<'static, str>,
    /// Whether an imported header must contain this column
    pub required: bool,
}

impl ColumnSpec {
    /// A column the header row must contain
    pub const fn required(key: &'static str, label: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            label: Cow::Borrowed(label),
            required: true,
        }
    }

    /// A column that may be left out of the header row
    pub const fn optional(key: &'static str, label: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            label: Cow::Borrowed(label),
            required: false,
        }
    }

    /// Build a column from owned strings
    pub fn new<K, L>(key: K, label: L, required: bool) -> Self
    where
        K: Into<Cow<'static, str>>,
        L: Into<Cow<'static, str>>,
    {
        Self {
            key: key.into(),
            label: label.into(),
            required,
        }
    }

    /// Lower-cased label, the form parsed header names take
    pub fn header_name(&self) -> String {
        self.label.to_lowercase()
    }
}

impl ColumnDef for ColumnSpec {
    fn key(&self) -> &str {
        &self.key
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// A column of an exported spreadsheet tab
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetColumn {
    /// Record field name
    pub key: Cow<'static, str>,
    /// Header cell text
    pub label: Cow<'static, str>,
}

impl SheetColumn {
    pub fn new<K, L>(key: K, label: L) -> Self
    where
        K: Into<Cow<'static, str>>,
        L: Into<Cow<'static, str>>,
    {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

impl ColumnDef for SheetColumn {
    fn key(&self) -> &str {
        &self.key
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl From<&ColumnSpec> for SheetColumn {
    fn from(spec: &ColumnSpec) -> Self {
        Self {
            key: spec.key.clone(),
            label: spec.label.clone(),
        }
    }
}

impl From<ColumnSpec> for SheetColumn {
    fn from(spec: ColumnSpec) -> Self {
        Self {
            key: spec.key,
            label: spec.label,
        }
    }
}
