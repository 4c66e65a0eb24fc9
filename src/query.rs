//! Ordered query-string parameters.
//!
//! This module provides [`QueryParams`], a wrapper around [`IndexMap`] that keeps
//! every occurrence of every key. Collection binding depends on two orders
//! being preserved:
//!
//! - **Repeated keys**: `ids=1&ids=2` keeps `1` before `2`
//! - **Key order**: keys iterate in first-seen order
//!
//! ## Examples
//!
//! ```rust
//! use serde_tristate::QueryParams;
//!
//! let params = QueryParams::parse("?ids=1&ids=2&name=Ada%20Lovelace&flag");
//!
//! assert_eq!(params.get_all("ids"), Some(&["1".to_string(), "2".to_string()][..]));
//! assert_eq!(params.get("name"), Some("Ada Lovelace"));
//! assert_eq!(params.get("flag"), Some(""));
//! assert_eq!(params.get("missing"), None);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered multimap of decoded query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(IndexMap<String, Vec<String>>);

impl QueryParams {
    /// Creates an empty parameter set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tristate::QueryParams;
    ///
    /// let params = QueryParams::new();
    /// assert!(params.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        QueryParams(IndexMap::new())
    }

    /// Decodes an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored, `+` decodes to a space, and a key without `=`
    /// is recorded with an empty value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tristate::QueryParams;
    ///
    /// let params = QueryParams::parse("q=rust+serde&tags=a,b");
    /// assert_eq!(params.get("q"), Some("rust serde"));
    /// assert_eq!(params.get("tags"), Some("a,b"));
    /// ```
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Appends one occurrence of `key`, after any existing ones.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Returns every occurrence of `key` in arrival order, or `None` if it never appeared.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Returns the first occurrence of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in first-seen order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Vec<String>> {
        self.0.keys()
    }

    /// Returns an iterator over each key and all of its occurrences.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = QueryParams::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.append(k, v);
        }
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
