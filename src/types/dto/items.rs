use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::item;

/// Response model representing an item
#[derive(Object, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    /// Server-generated identifier
    pub id: i32,

    /// Name of the item (1-255 characters)
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Timestamp when the item was created (RFC 3339)
    pub created_at: String,

    /// Timestamp of the last successful update (RFC 3339)
    pub updated_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// One page of items plus totals
#[derive(Object, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginatedItems {
    /// Items on this page, ordered by id ascending
    pub items: Vec<Item>,

    /// Total number of items
    pub total: u64,

    /// Requested page (1-based)
    pub page: u64,

    /// Requested page size
    pub size: u64,

    /// Number of pages for this size
    pub pages: u64,
}

/// Request model for creating a new item
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateItemRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request model for a partial update
///
/// `description: Some(None)` serializes as `null` and clears the field;
/// `None` leaves it out of the payload.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}
