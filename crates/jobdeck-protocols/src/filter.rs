//! Include/exclude filters over scheduled-job fields.
//!
//! A [`FilterSet`] is an ordered sequence of [`FilterItem`]s. Insertion order
//! is significant: it controls display order and the serialization order that
//! keeps the query-string round trip stable. All operations are copy-on-write
//! and leave the receiver untouched, so a failed operation can never corrupt
//! the active set.
//!
//! Exclusion filters serialize with a `not_` prefix on the field name, so a
//! field filtered on both polarities produces two distinct parameter keys.

use crate::error::FilterError;
use crate::params::ParamMap;
use crate::query::ReservedParams;

/// Prefix marking an exclusion filter in serialized form.
pub const EXCLUDE_PREFIX: &str = "not_";

/// A single filter over one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    /// Field the filter applies to.
    pub key: String,
    /// Free-text match value.
    pub value: String,
    /// `true` for a positive match, `false` for a negated match.
    pub include: bool,
}

impl FilterItem {
    /// Create an inclusion filter.
    pub fn include(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            include: true,
        }
    }

    /// Create an exclusion filter.
    pub fn exclude(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            include: false,
        }
    }

    /// The parameter key this filter serializes under.
    pub fn param_key(&self) -> String {
        if self.include {
            self.key.clone()
        } else {
            format!("{EXCLUDE_PREFIX}{}", self.key)
        }
    }
}

/// Ordered set of filters, unique per `(key, include)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(Vec<FilterItem>);

impl FilterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a filter, returning the new set.
    ///
    /// Key and value are trimmed; empty either way is rejected. If an entry
    /// with the same `(key, include)` pair exists its value is replaced at
    /// its existing position, otherwise the filter is appended.
    pub fn add(&self, item: FilterItem) -> Result<FilterSet, FilterError> {
        let key = item.key.trim();
        let value = item.value.trim();
        if key.is_empty() {
            return Err(FilterError::EmptyKey);
        }
        if value.is_empty() {
            return Err(FilterError::EmptyValue);
        }

        let item = FilterItem {
            key: key.to_string(),
            value: value.to_string(),
            include: item.include,
        };

        let mut next = self.0.clone();
        match next
            .iter_mut()
            .find(|f| f.key == item.key && f.include == item.include)
        {
            Some(existing) => existing.value = item.value,
            None => next.push(item),
        }
        Ok(FilterSet(next))
    }

    /// Remove the filter at `index`, returning the new set.
    pub fn remove(&self, index: usize) -> Result<FilterSet, FilterError> {
        if index >= self.0.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        let mut next = self.0.clone();
        next.remove(index);
        Ok(FilterSet(next))
    }

    /// Return an empty set.
    pub fn clear(&self) -> FilterSet {
        FilterSet::new()
    }

    /// Serialize into a parameter map, in set order.
    ///
    /// Inclusion filters use the field name as the key; exclusion filters
    /// prefix it with `not_`.
    pub fn to_params(&self) -> ParamMap {
        let mut params = ParamMap::new();
        for item in &self.0 {
            params.insert(item.param_key(), item.value.clone());
        }
        params
    }

    /// Rebuild a set from a parameter map, skipping reserved keys.
    ///
    /// Keys starting with `not_` become exclusion filters with the prefix
    /// stripped. Order follows the map's iteration order, which preserves the
    /// round trip for maps produced by [`FilterSet::to_params`].
    pub fn from_params(params: &ParamMap, reserved: &ReservedParams) -> FilterSet {
        let mut items = Vec::new();
        for (key, value) in params.iter() {
            if reserved.contains(key) {
                continue;
            }
            let item = match key.strip_prefix(EXCLUDE_PREFIX) {
                Some(field) => FilterItem::exclude(field, value),
                None => FilterItem::include(key, value),
            };
            items.push(item);
        }
        FilterSet(items)
    }

    /// Filter at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&FilterItem> {
        self.0.get(index)
    }

    /// Iterate filters in set order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterItem> {
        self.0.iter()
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<FilterItem> for FilterSet {
    fn from_iter<I: IntoIterator<Item = FilterItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
