//! Order-preserving query-string parameter map.
//!
//! Filter round-trip stability depends on parameter order, so this map keeps
//! insertion order and replaces values in place on duplicate keys instead of
//! reordering.

use url::form_urlencoded;

/// Flat string-keyed parameter map with stable iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap(Vec<(String, String)>);

impl ParamMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse from a query string (with or without a leading `?`).
    ///
    /// Duplicate keys keep the last value at the position of the first
    /// occurrence.
    pub fn from_query(query: &str) -> Self {
        let raw = query.strip_prefix('?').unwrap_or(query);
        let mut map = Self::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            map.insert(key.into_owned(), value.into_owned());
        }
        map
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Insert a pair. An existing key keeps its position and gets the new
    /// value; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the map contains a key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying pairs.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

impl FromIterator<(String, String)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for ParamMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
