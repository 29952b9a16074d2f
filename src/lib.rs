//! Minimal in-memory album CRUD HTTP service.
//!
//! A single resource ("album") exposed through list, get-by-id, create,
//! update, and delete endpoints. The collection lives in memory for the
//! process lifetime; there is no persistence and no authentication.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: The in-memory album collection
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus counters
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, StoreError};
pub use store::{Album, AlbumStore};
