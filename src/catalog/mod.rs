//! Catalog Module
//!
//! Item persistence, search/pagination, and cached summary statistics.

mod item;
mod query;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use item::{DraftItem, Item};
pub use query::{paginate, parse_page_param, search, PageMeta};
pub use stats::{PriceStats, StatsCache, StatsSnapshot};
pub use store::ItemStore;

// == Public Constants ==
/// Default page number when the query omits one
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when the query omits one
pub const DEFAULT_LIMIT: usize = 20;

/// Default statistics cache TTL in seconds
pub const DEFAULT_STATS_TTL_SECS: u64 = 300;
