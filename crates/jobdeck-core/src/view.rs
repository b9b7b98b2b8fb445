//! Transactional view-state store.
//!
//! The store owns the [`QueryState`] of one dashboard view and processes one
//! intent at a time. Each successful intent returns the effects the caller
//! must execute: push the serialized state to the navigable location, issue
//! a fetch, or both. Because state only changes inside `dispatch`, the
//! push/pull race between a local mutation and an asynchronous location
//! change cannot occur; no settle-timeout guard is needed.
//!
//! Pull-sync (`LocationChanged`, e.g. browser back/forward) compares the
//! incoming state to the current one by value and becomes a no-op when they
//! match. That breaks the loop where a pushed location change would
//! otherwise echo back as a pull.

use tracing::debug;

use jobdeck_protocols::{
    FilterItem, ParamMap, QueryError, QueryState, ReservedParams,
};

use crate::cache_key::derive_key;
use crate::fetch::FetchCoordinator;

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    /// Add or replace a filter.
    AddFilter(FilterItem),
    /// Remove the filter at an index.
    RemoveFilter(usize),
    /// Drop all filters.
    ClearFilters,
    /// Replace the search text (callers debounce keystrokes upstream).
    SetSearch(String),
    /// Jump to a page.
    SetPage(u32),
    /// Change the page size.
    SetLimit(u32),
    /// Switch the displayed entity type.
    SetEntityType(String),
    /// The navigable location changed independently of this store.
    LocationChanged(ParamMap),
}

/// A fetch the caller should issue against the remote data collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Canonical request parameters for the view.
    pub params: ParamMap,
    /// Cache tag the results should be stored under.
    pub cache_tag: String,
    /// Generation for last-write-wins result handling.
    pub generation: u64,
}

/// Effects of a dispatched intent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewEffects {
    /// New location query to push, if the location must change.
    pub push_location: Option<ParamMap>,
    /// Fetch to issue, if the visible data changed.
    pub fetch: Option<FetchRequest>,
}

impl ViewEffects {
    /// No effects; the intent was absorbed without a state change.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the intent produced no effects.
    pub fn is_none(&self) -> bool {
        self.push_location.is_none() && self.fetch.is_none()
    }
}

/// Owns one view's query state and serializes all transitions.
#[derive(Debug, Clone)]
pub struct ViewStore {
    state: QueryState,
    reserved: ReservedParams,
    fetches: FetchCoordinator,
}

impl ViewStore {
    /// Create a store over an initial state.
    pub fn new(state: QueryState, reserved: ReservedParams) -> Self {
        Self {
            state,
            reserved,
            fetches: FetchCoordinator::new(),
        }
    }

    /// Hydrate a store from a location's query parameters.
    pub fn from_location(
        params: &ParamMap,
        reserved: ReservedParams,
        default_entity: &str,
    ) -> Self {
        let state = QueryState::from_params(params, &reserved, default_entity);
        Self::new(state, reserved)
    }

    /// Current state snapshot.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Whether a fetch generation is still the latest issued one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.fetches.is_current(generation)
    }

    /// Apply an intent and return the effects to execute.
    ///
    /// A failed intent leaves the state exactly as it was.
    pub fn dispatch(&mut self, intent: ViewIntent) -> Result<ViewEffects, QueryError> {
        match intent {
            ViewIntent::AddFilter(item) => {
                self.state.filters = self.state.filters.add(item)?;
                self.state.page = 1;
                Ok(self.push_and_fetch())
            }
            ViewIntent::RemoveFilter(index) => {
                self.state.filters = self.state.filters.remove(index)?;
                self.state.page = 1;
                Ok(self.push_and_fetch())
            }
            ViewIntent::ClearFilters => {
                if self.state.filters.is_empty() {
                    return Ok(ViewEffects::none());
                }
                self.state.filters = self.state.filters.clear();
                self.state.page = 1;
                Ok(self.push_and_fetch())
            }
            ViewIntent::SetSearch(search) => {
                if search == self.state.search {
                    return Ok(ViewEffects::none());
                }
                self.state.search = search;
                self.state.page = 1;
                Ok(self.push_and_fetch())
            }
            ViewIntent::SetPage(page) => {
                if page == 0 {
                    return Err(QueryError::InvalidPage);
                }
                if page == self.state.page {
                    return Ok(ViewEffects::none());
                }
                self.state.page = page;
                Ok(self.push_and_fetch())
            }
            ViewIntent::SetLimit(limit) => {
                if limit == 0 {
                    return Err(QueryError::InvalidLimit);
                }
                let limit = QueryState::clamp_limit(limit);
                if limit == self.state.limit {
                    return Ok(ViewEffects::none());
                }
                self.state.limit = limit;
                self.state.page = 1;
                Ok(self.push_and_fetch())
            }
            ViewIntent::SetEntityType(entity_type) => {
                let entity_type = entity_type.trim().to_string();
                if entity_type.is_empty() {
                    return Err(QueryError::EmptyEntityType);
                }
                if entity_type == self.state.entity_type {
                    return Ok(ViewEffects::none());
                }
                self.state.entity_type = entity_type;
                self.state.page = 1;
                Ok(self.push_and_fetch())
            }
            ViewIntent::LocationChanged(params) => {
                let candidate = QueryState::from_params(
                    &params,
                    &self.reserved,
                    &self.state.entity_type,
                );
                if candidate == self.state {
                    debug!("Location change matches current state, ignoring");
                    return Ok(ViewEffects::none());
                }
                debug!("Adopting state from location change");
                self.state = candidate;
                // Pull-sync must not push the location back, that would echo.
                Ok(ViewEffects {
                    push_location: None,
                    fetch: Some(self.fetch_request()),
                })
            }
        }
    }

    fn push_and_fetch(&self) -> ViewEffects {
        ViewEffects {
            push_location: Some(self.state.to_params(&self.reserved)),
            fetch: Some(self.fetch_request()),
        }
    }

    fn fetch_request(&self) -> FetchRequest {
        let generation = self.fetches.begin();
        debug!(
            generation,
            entity = %self.state.entity_type,
            page = self.state.page,
            "Issuing fetch for view"
        );
        FetchRequest {
            params: self.state.to_params(&self.reserved),
            cache_tag: derive_key(&self.state),
            generation,
        }
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
