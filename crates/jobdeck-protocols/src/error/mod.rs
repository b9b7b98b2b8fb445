//! Error types for the jobdeck protocol layer.

mod api;
mod filter;
mod notify;
mod query;

pub use api::*;
pub use filter::*;
pub use notify::*;
pub use query::*;
