//! # Jobdeck Core
//!
//! The query-state engine behind the jobdeck scheduling dashboard:
//!
//! - [`view`] - transactional reducer keeping filter state and the navigable
//!   location in sync without update loops
//! - [`cache_key`] - deterministic cache-tag derivation and invalidation
//!   target enumeration
//! - [`fetch`] - last-write-wins coordination for in-flight list fetches
//! - [`debounce`] - trailing-edge debounce for search input
//! - [`notify`] - publish/subscribe hub for transient UI notifications

pub mod cache_key;
pub mod debounce;
pub mod fetch;
pub mod notify;
pub mod view;

pub use cache_key::{derive_key, entity_tag, invalidation_targets, list_tag};
pub use debounce::Debouncer;
pub use fetch::FetchCoordinator;
pub use notify::{Notification, NotificationHub, NotificationLevel};
pub use view::{FetchRequest, ViewEffects, ViewIntent, ViewStore};
