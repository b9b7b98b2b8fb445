//! # Jobdeck Protocols
//!
//! Shared data model and collaborator traits for the jobdeck query-state
//! engine. Contains the filter and query types, the wire models of the
//! remote scheduler API, and the traits the engine talks to - no
//! implementations beyond the types themselves.
//!
//! ## Core Types
//!
//! - [`FilterItem`] / [`FilterSet`] - ordered include/exclude filters
//! - [`ParamMap`] - order-preserving query-string parameter map
//! - [`QueryState`] - one dashboard view: entity, pagination, search, filters
//! - [`ScheduledJob`] / [`Page`] - remote API models
//!
//! ## Collaborator Traits
//!
//! - [`JobDataSource`] - the remote scheduler REST API
//! - [`CacheInvalidator`] - tag-based cache invalidation sink

pub mod error;
pub mod filter;
pub mod invalidate;
pub mod job;
pub mod params;
pub mod query;
pub mod source;

pub use error::{ApiError, FilterError, NotifyError, QueryError};
pub use filter::{FilterItem, FilterSet};
pub use invalidate::{CacheInvalidator, NoopInvalidator};
pub use job::{JobUpdate, NewJob, Page, ScheduledJob};
pub use params::ParamMap;
pub use query::{QueryState, ReservedParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use source::JobDataSource;
