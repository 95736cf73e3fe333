//! Validated, typed inputs handed from the API layer to the stores.

/// Fields for a new item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemInput {
    pub name: String,
    pub description: Option<String>,
}

/// Fields for a partial update
///
/// `description` is tri-state: `None` leaves it untouched, `Some(None)`
/// clears it, `Some(Some(_))` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateItemInput {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

/// Pagination parameters for the item listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub size: u64,
}

impl ListQuery {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_SIZE: u64 = 10;
    pub const MAX_SIZE: u64 = 100;
    /// Highest page whose offset still fits the database's signed 64-bit range
    pub const MAX_PAGE: u64 = i64::MAX as u64 / Self::MAX_SIZE;

    /// Rows to skip before this page
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size)
    }

    /// Page count for `total` rows at this page size
    pub fn pages(&self, total: u64) -> u64 {
        total.div_ceil(self.size)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_SIZE,
        }
    }
}
