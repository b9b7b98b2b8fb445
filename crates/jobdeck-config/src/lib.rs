//! # Jobdeck Config
//!
//! TOML configuration for the jobdeck engine and CLI, with `${VAR}`
//! environment-variable expansion and validation.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{ApiConfig, DashboardConfig, QueryConfig};
