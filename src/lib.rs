//! Catalog Server - a small catalog browsing API
//!
//! REST endpoints over a flat JSON item file: listing with search and
//! pagination, item detail, item creation, and cached summary statistics.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use error::{ApiError, Result};
