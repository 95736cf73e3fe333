use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    ApiResponse, OpenApi, Tags,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::errors::ItemError;
use crate::stores::ItemStore;
use crate::types::dto::items::{Item, PaginatedItems};
use crate::validation::{parse_item_id, parse_list_query, validate_create, validate_update};

/// Item CRUD API endpoints
///
/// Holds the pooled connection and hands it to the store on every call.
pub struct ItemsApi {
    db: DatabaseConnection,
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi over the given connection and store
    pub fn new(db: DatabaseConnection, item_store: Arc<ItemStore>) -> Self {
        Self { db, item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Item management endpoints
    Items,
}

/// Response for a successful create
#[derive(ApiResponse)]
pub enum CreateItemResponse {
    /// The stored item, including generated id and timestamps
    #[oai(status = 201)]
    Created(Json<Item>),
}

/// Response for a successful delete
#[derive(ApiResponse)]
pub enum DeleteItemResponse {
    /// Item removed
    #[oai(status = 204)]
    Deleted,
}

#[OpenApi(prefix_path = "/api/v1")]
impl ItemsApi {
    /// List items
    ///
    /// Returns one page of items ordered by id, with totals. `page` defaults
    /// to 1 and `size` to 10 (at most 100).
    #[oai(path = "/items", method = "get", tag = "ItemTags::Items")]
    async fn list_items(
        &self,
        page: Query<Option<String>>,
        size: Query<Option<String>>,
    ) -> Result<Json<PaginatedItems>, ItemError> {
        let query = parse_list_query(page.0.as_deref(), size.0.as_deref())?;

        let result = self
            .item_store
            .get_all(&self.db, query.offset(), query.size)
            .await?;

        Ok(Json(PaginatedItems {
            items: result.items.into_iter().map(Item::from).collect(),
            total: result.total,
            page: query.page,
            size: query.size,
            pages: query.pages(result.total),
        }))
    }

    /// Get a single item
    #[oai(path = "/items/:id", method = "get", tag = "ItemTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<Item>, ItemError> {
        let id = parse_item_id(&id.0)?;

        match self.item_store.get_by_id(&self.db, id).await? {
            Some(item) => Ok(Json(item.into())),
            None => Err(ItemError::not_found()),
        }
    }

    /// Create a new item
    ///
    /// Body: `{"name": string (1-255 chars), "description": string | null}`
    #[oai(path = "/items", method = "post", tag = "ItemTags::Items")]
    async fn create_item(
        &self,
        body: Json<serde_json::Value>,
    ) -> Result<CreateItemResponse, ItemError> {
        let input = validate_create(&body.0)?;

        let item = self.item_store.create(&self.db, input).await?;

        Ok(CreateItemResponse::Created(Json(item.into())))
    }

    /// Update an item
    ///
    /// Only the supplied fields change; `"description": null` clears the
    /// description. `updated_at` is always refreshed.
    #[oai(path = "/items/:id", method = "put", tag = "ItemTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<serde_json::Value>,
    ) -> Result<Json<Item>, ItemError> {
        let id = parse_item_id(&id.0)?;
        let input = validate_update(&body.0)?;

        match self.item_store.update(&self.db, id, input).await? {
            Some(item) => Ok(Json(item.into())),
            None => Err(ItemError::not_found()),
        }
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<DeleteItemResponse, ItemError> {
        let id = parse_item_id(&id.0)?;

        if self.item_store.delete(&self.db, id).await? {
            Ok(DeleteItemResponse::Deleted)
        } else {
            Err(ItemError::not_found())
        }
    }
}
