use crate::errors::InternalError;
use crate::types::db::item::{self, ActiveModel, Entity as Items};
use crate::types::input::{CreateItemInput, UpdateItemInput};
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};

/// One page of items and the table's total row count
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPage {
    pub items: Vec<item::Model>,
    pub total: u64,
}

/// ItemStore maps the item CRUD verbs onto single storage statements
///
/// The store holds no connection; every call receives one, so handlers
/// decide which pool or transaction the statement runs on.
pub struct ItemStore {}

impl ItemStore {
    pub fn new() -> Self {
        Self {}
    }

    /// List a page of items ordered by id, with the total item count
    ///
    /// The listing and the count are independent reads issued together.
    /// Under concurrent writes `total` may not match the page exactly.
    ///
    /// # Arguments
    /// * `skip` - Number of rows to skip
    /// * `limit` - Maximum number of rows to return
    pub async fn get_all(
        &self,
        conn: &impl ConnectionTrait,
        skip: u64,
        limit: u64,
    ) -> Result<ItemPage, InternalError> {
        let listing = async {
            Items::find()
                .order_by_asc(item::Column::Id)
                .offset(skip)
                .limit(limit)
                .all(conn)
                .await
                .map_err(|e| InternalError::database("list_items", e))
        };
        let counting = async {
            Items::find()
                .count(conn)
                .await
                .map_err(|e| InternalError::database("count_items", e))
        };

        let (items, total) = tokio::try_join!(listing, counting)?;

        Ok(ItemPage { items, total })
    }

    /// Look up a single item
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - The item
    /// * `Ok(None)` - No item with this id
    /// * `Err(InternalError)` - Database error
    pub async fn get_by_id(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<Option<item::Model>, InternalError> {
        Items::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_item", e))
    }

    /// Insert a new item and return the stored row
    ///
    /// Both timestamps are set to the same instant.
    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        input: CreateItemInput,
    ) -> Result<item::Model, InternalError> {
        let now = format_timestamp(Utc::now());
        let new_item = ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = new_item
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_item", e))?;

        tracing::debug!(item_id = model.id, "Item created");

        Ok(model)
    }

    /// Apply a partial update and refresh `updated_at`
    ///
    /// Only the fields present in `input` are written. `updated_at` always
    /// moves forward, even when `input` is empty.
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - The updated item
    /// * `Ok(None)` - No item with this id
    /// * `Err(InternalError)` - Database error
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        input: UpdateItemInput,
    ) -> Result<Option<item::Model>, InternalError> {
        let Some(existing) = self.get_by_id(conn, id).await? else {
            return Ok(None);
        };

        let updated_at = next_timestamp(&existing.updated_at);
        let mut active_model: ActiveModel = existing.into();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(description) = input.description {
            active_model.description = Set(description);
        }
        active_model.updated_at = Set(updated_at);

        match active_model.update(conn).await {
            Ok(model) => {
                tracing::debug!(item_id = model.id, "Item updated");
                Ok(Some(model))
            }
            // Deleted between the lookup and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(InternalError::database("update_item", e)),
        }
    }

    /// Delete an item
    ///
    /// # Returns
    /// * `Ok(true)` - A row was removed
    /// * `Ok(false)` - No item with this id
    /// * `Err(InternalError)` - Database error
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i32) -> Result<bool, InternalError> {
        let result = Items::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected > 0 {
            tracing::debug!(item_id = id, "Item deleted");
        }

        Ok(result.rows_affected > 0)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore").finish()
    }
}

/// RFC 3339, UTC, microsecond precision; lexical order matches time order
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time, but strictly after `previous`
fn next_timestamp(previous: &str) -> String {
    let now = Utc::now();
    match DateTime::parse_from_rfc3339(previous) {
        Ok(previous) => {
            let previous = previous.with_timezone(&Utc);
            if now > previous {
                format_timestamp(now)
            } else {
                format_timestamp(previous + TimeDelta::microseconds(1))
            }
        }
        // Column default (`YYYY-MM-DD HH:MM:SS`) sorts before any RFC 3339 value of the same second
        Err(_) => format_timestamp(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_has_microseconds_and_z() {
        let at = DateTime::parse_from_rfc3339("2025-03-01T10:00:00.5Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(at), "2025-03-01T10:00:00.500000Z");
    }

    #[test]
    fn test_next_timestamp_is_after_past_value() {
        let previous = "2001-01-01T00:00:00.000000Z";
        assert!(next_timestamp(previous).as_str() > previous);
    }

    #[test]
    fn test_next_timestamp_bumps_future_value() {
        let previous = "2999-12-31T23:59:59.999998Z";
        assert_eq!(next_timestamp(previous), "2999-12-31T23:59:59.999999Z");
    }

    #[test]
    fn test_next_timestamp_after_column_default() {
        let previous = "2001-01-01 00:00:00";
        assert!(next_timestamp(previous).as_str() > previous);
    }
}
