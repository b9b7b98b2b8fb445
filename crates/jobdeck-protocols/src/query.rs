//! Query state for one dashboard view.

use crate::filter::FilterSet;
use crate::params::ParamMap;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 20;

/// Upper bound on page size.
pub const MAX_LIMIT: u32 = 100;

/// The parameter keys that are not filters.
///
/// `page`, `limit` and `search` are fixed; the entity-type selector key is
/// deployment-specific (the dashboard uses `jobType`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedParams {
    pub page_key: String,
    pub limit_key: String,
    pub search_key: String,
    pub entity_key: String,
}

impl Default for ReservedParams {
    fn default() -> Self {
        Self {
            page_key: "page".to_string(),
            limit_key: "limit".to_string(),
            search_key: "search".to_string(),
            entity_key: "jobType".to_string(),
        }
    }
}

impl ReservedParams {
    /// Reserved params with a custom entity-type selector key.
    pub fn with_entity_key(entity_key: impl Into<String>) -> Self {
        Self {
            entity_key: entity_key.into(),
            ..Self::default()
        }
    }

    /// Whether `key` is reserved (non-filter).
    pub fn contains(&self, key: &str) -> bool {
        key == self.page_key
            || key == self.limit_key
            || key == self.search_key
            || key == self.entity_key
    }
}

/// One view of the dashboard: entity type, pagination, search and filters.
///
/// Owned by the calling context and passed by value into pure derivation
/// functions; there is no shared mutable global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Remote entity type (e.g. `scheduledJobs`).
    pub entity_type: String,
    /// 1-based page number.
    pub page: u32,
    /// Page size, within `[1, MAX_LIMIT]`.
    pub limit: u32,
    /// Free-text search, empty when unset.
    pub search: String,
    /// Active filters.
    pub filters: FilterSet,
}

impl QueryState {
    /// Fresh state for an entity type: page 1, default limit, no search, no
    /// filters.
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            page: 1,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            filters: FilterSet::new(),
        }
    }

    /// Clamp a requested limit into `[1, MAX_LIMIT]`.
    pub fn clamp_limit(limit: u32) -> u32 {
        limit.clamp(1, MAX_LIMIT)
    }

    /// Serialize into the full parameter map: reserved keys first, filters
    /// after, in set order. The search key is omitted when empty.
    pub fn to_params(&self, reserved: &ReservedParams) -> ParamMap {
        let mut params = ParamMap::new();
        params.insert(reserved.entity_key.clone(), self.entity_type.clone());
        params.insert(reserved.page_key.clone(), self.page.to_string());
        params.insert(reserved.limit_key.clone(), self.limit.to_string());
        if !self.search.is_empty() {
            params.insert(reserved.search_key.clone(), self.search.clone());
        }
        for (key, value) in self.filters.to_params() {
            params.insert(key, value);
        }
        params
    }

    /// Rebuild state from a location's parameter map.
    ///
    /// Missing or unparseable reserved values fall back to defaults; the
    /// limit is clamped. Unknown keys become filters.
    pub fn from_params(
        params: &ParamMap,
        reserved: &ReservedParams,
        default_entity: &str,
    ) -> Self {
        let entity_type = params
            .get(&reserved.entity_key)
            .filter(|v| !v.is_empty())
            .unwrap_or(default_entity)
            .to_string();
        let page = params
            .get(&reserved.page_key)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        let limit = params
            .get(&reserved.limit_key)
            .and_then(|v| v.parse::<u32>().ok())
            .map(Self::clamp_limit)
            .unwrap_or(DEFAULT_LIMIT);
        let search = params
            .get(&reserved.search_key)
            .unwrap_or_default()
            .to_string();
        let filters = FilterSet::from_params(params, reserved);

        Self {
            entity_type,
            page,
            limit,
            search,
            filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterItem;

    #[test]
    fn test_new_defaults() {
        let state = QueryState::new("scheduledJobs");
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, DEFAULT_LIMIT);
        assert!(state.search.is_empty());
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(QueryState::clamp_limit(0), 1);
        assert_eq!(QueryState::clamp_limit(20), 20);
        assert_eq!(QueryState::clamp_limit(500), MAX_LIMIT);
    }

    #[test]
    fn test_to_params_reserved_then_filters() {
        let mut state = QueryState::new("scheduledJobs");
        state.search = "backup".to_string();
        state.filters = state
            .filters
            .add(FilterItem::include("status", "ACTIVE"))
            .unwrap();

        let params = state.to_params(&ReservedParams::default());
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["jobType", "page", "limit", "search", "status"]);
        assert_eq!(params.get("jobType"), Some("scheduledJobs"));
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("limit"), Some("20"));
        assert_eq!(params.get("search"), Some("backup"));
        assert_eq!(params.get("status"), Some("ACTIVE"));
    }

    #[test]
    fn test_to_params_omits_empty_search() {
        let state = QueryState::new("scheduledJobs");
        let params = state.to_params(&ReservedParams::default());
        assert!(!params.contains_key("search"));
    }

    #[test]
    fn test_from_params_defaults() {
        let params = ParamMap::new();
        let state = QueryState::from_params(
            &params,
            &ReservedParams::default(),
            "scheduledJobs",
        );
        assert_eq!(state, QueryState::new("scheduledJobs"));
    }

    #[test]
    fn test_from_params_bad_page_falls_back() {
        let params = ParamMap::from_query("page=zero&limit=300");
        let state = QueryState::from_params(
            &params,
            &ReservedParams::default(),
            "scheduledJobs",
        );
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, MAX_LIMIT);
    }

    #[test]
    fn test_from_params_full_round_trip() {
        let mut state = QueryState::new("scheduledJobs");
        state.page = 3;
        state.limit = 50;
        state.search = "nightly".to_string();
        state.filters = state
            .filters
            .add(FilterItem::exclude("username", "bob"))
            .unwrap();

        let reserved = ReservedParams::default();
        let rebuilt =
            QueryState::from_params(&state.to_params(&reserved), &reserved, "other");
        assert_eq!(rebuilt, state);
    }

    #[test]
    fn test_reserved_contains() {
        let reserved = ReservedParams::default();
        assert!(reserved.contains("page"));
        assert!(reserved.contains("jobType"));
        assert!(!reserved.contains("status"));
        assert!(!reserved.contains("not_status"));
    }

    #[test]
    fn test_custom_entity_key() {
        let reserved = ReservedParams::with_entity_key("entity");
        assert!(reserved.contains("entity"));
        assert!(!reserved.contains("jobType"));
    }
}
