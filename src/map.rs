//! Ordered map type for element attributes.
//!
//! This module provides [`AttrMap`], a wrapper around [`IndexMap`] that maintains
//! insertion order for attributes. Order matters in Premark: attributes render
//! in document order when a tree is serialized, so the container the tree stores
//! them in has to be an observable part of the contract.
//!
//! ## Why IndexMap?
//!
//! Premark uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: attributes serialize in the order they appeared
//! - **Iteration order**: iteration follows insertion order
//! - **Duplicate resolution**: re-inserting a key keeps its original position
//!   while replacing its value, which is exactly the "rightmost wins" rule the
//!   parser needs
//!
//! ## Examples
//!
//! ```rust
//! use premark::AttrMap;
//!
//! let mut attrs = AttrMap::new();
//! attrs.insert("type".to_string(), "warn".to_string());
//! attrs.insert("level".to_string(), "2".to_string());
//!
//! assert_eq!(attrs.len(), 2);
//! assert_eq!(attrs.get("type"), Some("warn"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered map of attribute names to attribute values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order.
/// Attribute values are always strings; Premark has no other value types.
///
/// # Examples
///
/// ```rust
/// use premark::AttrMap;
///
/// let mut attrs = AttrMap::new();
/// attrs.insert("first".to_string(), "1".to_string());
/// attrs.insert("second".to_string(), "2".to_string());
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = attrs.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap(IndexMap<String, String>);

impl AttrMap {
    /// Creates an empty `AttrMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::AttrMap;
    ///
    /// let attrs = AttrMap::new();
    /// assert!(attrs.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        AttrMap(IndexMap::new())
    }

    /// Creates an empty `AttrMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AttrMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts an attribute into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position. This is the behavior the parser
    /// relies on for duplicate attributes: the value written last wins, the
    /// position of the first occurrence is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::AttrMap;
    ///
    /// let mut attrs = AttrMap::new();
    /// assert!(attrs.insert("a".to_string(), "1".to_string()).is_none());
    /// assert_eq!(attrs.insert("a".to_string(), "2".to_string()).as_deref(), Some("1"));
    /// assert_eq!(attrs.get("a"), Some("2"));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns the value corresponding to the key, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premark::AttrMap;
    ///
    /// let mut attrs = AttrMap::new();
    /// attrs.insert("type".to_string(), "warn".to_string());
    /// assert_eq!(attrs.get("type"), Some("warn"));
    /// assert_eq!(attrs.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of attributes in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the attribute names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the attribute values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the name-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AttrMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, String)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        AttrMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, String)> for AttrMap {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::AttrMap;

    #[test]
    fn test_insertion_order_preserved() {
        let mut attrs = AttrMap::new();
        attrs.insert("z".to_string(), "1".to_string());
        attrs.insert("a".to_string(), "2".to_string());
        attrs.insert("m".to_string(), "3".to_string());

        let keys: Vec<_> = attrs.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_reinsert_keeps_position_replaces_value() {
        let mut attrs = AttrMap::new();
        attrs.insert("a".to_string(), "1".to_string());
        attrs.insert("b".to_string(), "2".to_string());
        attrs.insert("a".to_string(), "3".to_string());

        let pairs: Vec<_> = attrs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_from_iterator() {
        let attrs: AttrMap = vec![
            ("one".to_string(), "1".to_string()),
            ("two".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("two"), Some("2"));
    }
}
