//! Cache-tag derivation.
//!
//! Every list view is cached under a tag derived from its [`QueryState`].
//! The filter signature is sorted by parameter key before joining, so two
//! states whose filters were added in different orders share one tag.
//!
//! Invalidation deliberately over-invalidates: every mutation drops the
//! entity's generic `-list` tag, which covers all paginated, filtered and
//! searched views of that entity, plus one per-record tag per mutated id.

use std::collections::BTreeSet;

use url::form_urlencoded;

use jobdeck_protocols::{FilterSet, QueryState};

/// Derive the cache tag for a view. Never fails; empty segments are omitted.
///
/// Key shape: `{entity}[-search-{encoded search}][-filters-{signature}]`.
pub fn derive_key(state: &QueryState) -> String {
    let mut key = state.entity_type.clone();
    if !state.search.is_empty() {
        let encoded: String =
            form_urlencoded::byte_serialize(state.search.as_bytes()).collect();
        key.push_str("-search-");
        key.push_str(&encoded);
    }
    let signature = filter_signature(&state.filters);
    if !signature.is_empty() {
        key.push_str("-filters-");
        key.push_str(&signature);
    }
    key
}

/// The generic list tag covering every view of an entity type.
pub fn list_tag(entity_type: &str) -> String {
    format!("{entity_type}-list")
}

/// The tag of a single record.
pub fn entity_tag(entity_type: &str, id: &str) -> String {
    format!("{entity_type}-{id}")
}

/// The tags to invalidate after mutating `mutated_ids` of an entity type.
///
/// Always contains the list tag; per-record tags are added for each id.
pub fn invalidation_targets<S: AsRef<str>>(
    entity_type: &str,
    mutated_ids: &[S],
) -> BTreeSet<String> {
    let mut targets = BTreeSet::new();
    targets.insert(list_tag(entity_type));
    for id in mutated_ids {
        targets.insert(entity_tag(entity_type, id.as_ref()));
    }
    targets
}

/// Serialized filter pairs, sorted lexicographically by parameter key and
/// joined as `key-value` segments. Sorting makes the signature insensitive
/// to filter insertion order.
fn filter_signature(filters: &FilterSet) -> String {
    let mut pairs = filters.to_params().into_pairs();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
        .iter()
        .map(|(key, value)| format!("{key}-{value}"))
        .collect::<Vec<_>>()
        .join("-")
}
