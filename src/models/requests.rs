//! Request DTOs for the catalog server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::catalog::DraftItem;

/// Request body for item creation (POST /items)
///
/// Deliberately loose: every field is defaulted and unknown fields are
/// ignored, so any JSON object is accepted. The permissive contract is part
/// of the API; creation never fails on payload shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewItem {
    /// Display name (defaults to empty)
    #[serde(default)]
    pub name: String,
    /// Category label (defaults to empty)
    #[serde(default)]
    pub category: String,
    /// Unit price (defaults to 0)
    #[serde(default)]
    pub price: f64,
    /// Optional image URI
    #[serde(default)]
    pub image: Option<String>,
}

impl NewItem {
    /// Converts the loose payload into a store-ready draft.
    pub fn into_draft(self) -> DraftItem {
        DraftItem {
            name: self.name,
            category: self.category,
            price: self.price,
            image: self.image,
        }
    }
}

/// Query string for the listing endpoint (GET /items)
///
/// `page` and `limit` stay raw strings here; the query layer parses and
/// clamps them, so malformed values fall back instead of rejecting the
/// request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Substring filter on item names
    #[serde(default)]
    pub q: Option<String>,
    /// Requested page number (default 1)
    #[serde(default)]
    pub page: Option<String>,
    /// Requested page size (default 20)
    #[serde(default)]
    pub limit: Option<String>,
}
