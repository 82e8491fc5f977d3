//! Item Module
//!
//! Defines the catalog entry record and its pre-persistence form.

use serde::{Deserialize, Serialize};

// == Item ==
/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned at creation
    pub id: i64,
    /// Display name, the search target
    pub name: String,
    /// Category label used for statistics grouping
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Optional image URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// == Draft Item ==
/// An item payload that has not been assigned an id yet.
///
/// Carries whatever the caller supplied; the store fills in the id when
/// the draft is appended to the collection.
#[derive(Debug, Clone, Default)]
pub struct DraftItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: Option<String>,
}

impl DraftItem {
    /// Completes the draft into a persisted `Item` with the given id.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            image: self.image,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serialize_skips_absent_image() {
        let item = Item {
            id: 1,
            name: "Laptop Pro".to_string(),
            category: "Electronics".to_string(),
            price: 2499.0,
            image: None,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("image"));
    }

    #[test]
    fn test_item_deserialize_without_image() {
        let json = r#"{"id":1,"name":"Laptop Pro","category":"Electronics","price":2499}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.price, 2499.0);
        assert!(item.image.is_none());
    }

    #[test]
    fn test_draft_into_item() {
        let draft = DraftItem {
            name: "Standing Desk".to_string(),
            category: "Furniture".to_string(),
            price: 1199.0,
            image: Some("https://example.com/desk.png".to_string()),
        };

        let item = draft.into_item(42);
        assert_eq!(item.id, 42);
        assert_eq!(item.name, "Standing Desk");
        assert_eq!(item.image.as_deref(), Some("https://example.com/desk.png"));
    }
}
