//! # Jobdeck Client
//!
//! The remote scheduler API collaborator: a `reqwest`-based implementation
//! of [`jobdeck_protocols::JobDataSource`], and [`JobService`], which wraps
//! a data source with the cache-invalidation and notification side effects
//! every mutation carries.

pub mod client;
pub mod service;

pub use client::SchedulerApiClient;
pub use service::JobService;
