//! Ordered map type for plist dicts.
//!
//! This module provides [`Dict`], a wrapper around [`IndexMap`] that
//! maintains insertion order for dict entries.
//!
//! ## Why IndexMap?
//!
//! The format itself leaves dict entry order unspecified, but serializing
//! in insertion order makes output deterministic: a parsed document writes
//! its keys back in the order they appeared in the markup, and tests can
//! assert exact output.
//!
//! ## Examples
//!
//! ```rust
//! use plist_xml::{Dict, Value};
//!
//! let mut dict = Dict::new();
//! dict.insert("name".to_string(), Value::from("Alice"));
//! dict.insert("logins".to_string(), Value::from(42));
//!
//! assert_eq!(dict.len(), 2);
//! assert_eq!(dict.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to plist values.
///
/// Duplicate inserts keep the key's original position and replace the
/// value, matching the "last write for a duplicate key wins" rule of the
/// dict pairing protocol.
///
/// # Examples
///
/// ```rust
/// use plist_xml::{Dict, Value};
///
/// let mut dict = Dict::new();
/// dict.insert("first".to_string(), Value::from(1));
/// dict.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = dict.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dict(IndexMap<String, crate::Value>);

impl Dict {
    /// Creates an empty `Dict`.
    #[must_use]
    pub fn new() -> Self {
        Dict(IndexMap::new())
    }

    /// Creates an empty `Dict` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dict(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the dict.
    ///
    /// If the dict already contained this key, the old value is returned
    /// and the key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Removes a key from the dict, returning its value if it was present.
    ///
    /// Preserves the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the dict contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the dict.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the dict contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes all entries, keeping the allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the keys of the dict, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the dict, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries of the dict, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for Dict {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        Dict(map.into_iter().collect())
    }
}

impl From<Dict> for HashMap<String, crate::Value> {
    fn from(dict: Dict) -> Self {
        dict.0.into_iter().collect()
    }
}

impl IntoIterator for Dict {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for Dict {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Dict(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, crate::Value)> for Dict {
    fn extend<T: IntoIterator<Item = (String, crate::Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
