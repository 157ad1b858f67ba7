//! Record-like rows

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::value::FieldValue;

/// Anything that can hand out field values by key
///
/// Keys that a record does not know read as [`FieldValue::Empty`].
pub trait Record {
    /// Value of the field named `key`
    fn field(&self, key: &str) -> FieldValue;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> FieldValue {
        (**self).field(key)
    }
}

impl<V, S> Record for HashMap<String, V, S>
where
    V: Clone + Into<FieldValue>,
    S: BuildHasher,
{
    fn field(&self, key: &str) -> FieldValue {
        self.get(key).cloned().map_or(FieldValue::Empty, Into::into)
    }
}

impl<V> Record for BTreeMap<String, V>
where
    V: Clone + Into<FieldValue>,
{
    fn field(&self, key: &str) -> FieldValue {
        self.get(key).cloned().map_or(FieldValue::Empty, Into::into)
    }
}

/// One data line of delimited text, keyed by lower-cased header name
///
/// Entries keep header order. Created by the table parser and never modified
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRow {
    entries: Vec<(String, String)>,
}

impl ParsedRow {
    /// Zip header names against a line's fields
    ///
    /// Missing trailing fields become empty strings; fields past the last
    /// header are dropped. A repeated header keeps its first position and
    /// takes the later value.
    pub fn from_fields<H, F>(headers: &[H], fields: F) -> Self
    where
        H: AsRef<str>,
        F: IntoIterator<Item = String>,
    {
        let mut fields = fields.into_iter();
        headers
            .iter()
            .map(|h| (h.as_ref().to_string(), fields.next().unwrap_or_default()))
            .collect()
    }

    /// Raw value under a header name (compared case-insensitively)
    pub fn get(&self, header: &str) -> Option<&str> {
        let header = header.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == header)
            .map(|(_, v)| v.as_str())
    }

    /// Value under a header name, or `""` when the column is absent
    pub fn value(&self, header: &str) -> &str {
        self.get(header).unwrap_or("")
    }

    /// Value under a header name if present and not blank, trimmed
    pub fn non_blank(&self, header: &str) -> Option<&str> {
        self.get(header).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Header names in order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// (header, value) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ParsedRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, value) in iter {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self { entries }
    }
}

impl Record for ParsedRow {
    fn field(&self, key: &str) -> FieldValue {
        self.get(key).map_or(FieldValue::Empty, FieldValue::text)
    }
}
