// Validation layer - pure checks between raw request input and typed values
pub mod items;

pub use items::{parse_item_id, parse_list_query, validate_create, validate_update, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
