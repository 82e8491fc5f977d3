//! Response DTOs for the catalog server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::catalog::{Item, PageMeta};

/// Redacted `stack` value used in production error responses.
pub const STACK_SENTINEL: &str = "🥞";

/// Response body for the listing endpoint (GET /items)
///
/// Pagination metadata reflects the filtered collection, not the full one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    /// Effective page number
    pub page: usize,
    /// Effective page size
    pub limit: usize,
    /// Filtered collection size before pagination
    pub total_items: usize,
    /// Total number of pages at this limit
    pub total_pages: usize,
    /// The page of items
    pub items: Vec<Item>,
}

impl ItemPage {
    /// Creates a new ItemPage from a page slice and its metadata
    pub fn new(items: Vec<Item>, meta: PageMeta) -> Self {
        Self {
            page: meta.page,
            limit: meta.limit,
            total_items: meta.total_items,
            total_pages: meta.total_pages,
            items,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
///
/// `stack` carries the full failure detail outside production and the fixed
/// sentinel in production.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Error message describing what went wrong
    pub message: String,
    /// Failure detail, or the redacted sentinel in production
    pub stack: String,
}

impl ErrorBody {
    /// Creates a new ErrorBody, redacting the detail in production mode
    pub fn new(message: impl Into<String>, detail: impl Into<String>, production: bool) -> Self {
        Self {
            message: message.into(),
            stack: if production {
                STACK_SENTINEL.to_string()
            } else {
                detail.into()
            },
        }
    }
}
