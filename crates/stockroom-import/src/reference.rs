//! Reference data supplied by the persistence layer

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ImportResult;

/// A set of names compared case-insensitively, ignoring surrounding whitespace
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NameSet {
    lookup: AHashSet<String>,
    names: Vec<String>,
}

impl NameSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().collect()
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Add a name; returns false if an equivalent name was already present
    pub fn insert<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.lookup.insert(Self::normalize(&name)) {
            self.names.push(name);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(&Self::normalize(name))
    }

    /// Names as supplied, in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Sorted, comma-separated names for messages
    pub fn display_list(&self) -> String {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.join(", ")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameSet::default();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl From<Vec<String>> for NameSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<NameSet> for Vec<String> {
    fn from(set: NameSet) -> Self {
        set.names
    }
}

/// Known names and enumerations that rows are checked against
///
/// ```json
/// {
///   "categories": ["Tools", "Fasteners"],
///   "locations": ["Main Warehouse", "Shelf A"],
///   "location_types": ["warehouse", "room", "shelf", "bin"],
///   "item_codes": ["HAM-01"],
///   "transaction_types": ["in", "out", "adjustment", "transfer"]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub categories: NameSet,
    pub locations: NameSet,
    pub location_types: NameSet,
    pub item_codes: NameSet,
    pub transaction_types: NameSet,
}

impl ReferenceData {
    /// Decode reference data from JSON; missing sets are empty
    pub fn from_json(json: &str) -> ImportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load reference data from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn with_categories<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = NameSet::new(names);
        self
    }

    pub fn with_locations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = NameSet::new(names);
        self
    }

    pub fn with_location_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.location_types = NameSet::new(names);
        self
    }

    pub fn with_item_codes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_codes = NameSet::new(names);
        self
    }

    pub fn with_transaction_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transaction_types = NameSet::new(names);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_set_is_case_insensitive() {
        let set = NameSet::new(["Tools", "Fasteners"]);
        assert!(set.contains("tools"));
        assert!(set.contains(" FASTENERS "));
        assert!(!set.contains("Paint"));
    }

    #[test]
    fn test_name_set_dedupes() {
        let mut set = NameSet::new(["Shelf"]);
        assert!(!set.insert("shelf"));
        assert!(set.insert("Bin"));
        assert_eq!(set.names(), &["Shelf".to_string(), "Bin".to_string()]);
        assert_eq!(set.display_list(), "Bin, Shelf");
    }

    #[test]
    fn test_from_json() {
        let refs = ReferenceData::from_json(
            r#"{"categories": ["Tools"], "transaction_types": ["in", "out"]}"#,
        )
        .unwrap();
        assert!(refs.categories.contains("TOOLS"));
        assert_eq!(refs.transaction_types.len(), 2);
        assert!(refs.locations.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ReferenceData::from_json("{\"categories\": 3}").is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refs.json");
        std::fs::write(&path, r#"{"item_codes": ["HAM-01"]}"#).unwrap();
        let refs = ReferenceData::from_json_file(&path).unwrap();
        assert!(refs.item_codes.contains("ham-01"));
    }
}
