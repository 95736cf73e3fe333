use super::{ApiClient, ApiResponse};
use crate::types::dto::common::HealthResponse;
use crate::types::dto::items::{CreateItemRequest, Item, PaginatedItems, UpdateItemRequest};

const ITEMS_PATH: &str = "/api/v1/items";

/// Typed calls for the item endpoints
impl ApiClient {
    pub async fn health(&self) -> ApiResponse<HealthResponse> {
        self.get("/health").await
    }

    pub async fn list_items(&self, page: u64, size: u64) -> ApiResponse<PaginatedItems> {
        self.get(&format!("{}?page={}&size={}", ITEMS_PATH, page, size)).await
    }

    pub async fn get_item(&self, id: i32) -> ApiResponse<Item> {
        self.get(&format!("{}/{}", ITEMS_PATH, id)).await
    }

    pub async fn create_item(&self, request: &CreateItemRequest) -> ApiResponse<Item> {
        self.post(ITEMS_PATH, request).await
    }

    pub async fn update_item(&self, id: i32, request: &UpdateItemRequest) -> ApiResponse<Item> {
        self.put(&format!("{}/{}", ITEMS_PATH, id), request).await
    }

    pub async fn delete_item(&self, id: i32) -> ApiResponse<()> {
        self.delete(&format!("{}/{}", ITEMS_PATH, id)).await
    }
}
