//! Item request validation.
//!
//! Every function here is pure: it inspects the raw payload, query string or
//! path segment and returns either a typed value or a [`ValidationError`]
//! listing every offending field.

use serde_json::{Map, Value};

use crate::errors::validation::{FieldError, ValidationError};
use crate::types::input::{CreateItemInput, ListQuery, UpdateItemInput};

pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 255;

/// Validate the body of a create request
pub fn validate_create(payload: &Value) -> Result<CreateItemInput, ValidationError> {
    let object = as_object(payload)?;
    let mut errors = Vec::new();

    let name = match object.get("name") {
        None | Some(Value::Null) => {
            errors.push(FieldError::new("name", "is required"));
            None
        }
        Some(value) => check_name(value, &mut errors),
    };
    let description = match object.get("description") {
        None => None,
        Some(value) => check_description(value, &mut errors).flatten(),
    };

    match name {
        Some(name) if errors.is_empty() => Ok(CreateItemInput { name, description }),
        _ => Err(ValidationError::new(errors)),
    }
}

/// Validate the body of a partial update request
pub fn validate_update(payload: &Value) -> Result<UpdateItemInput, ValidationError> {
    let object = as_object(payload)?;
    let mut errors = Vec::new();

    let name = match object.get("name") {
        None => None,
        Some(Value::Null) => {
            errors.push(FieldError::new("name", "cannot be null"));
            None
        }
        Some(value) => check_name(value, &mut errors),
    };
    let description = match object.get("description") {
        None => None,
        Some(value) => check_description(value, &mut errors),
    };

    if errors.is_empty() {
        Ok(UpdateItemInput { name, description })
    } else {
        Err(ValidationError::new(errors))
    }
}

/// Parse the `:id` path segment
pub fn parse_item_id(raw: &str) -> Result<i32, ValidationError> {
    raw.parse::<i32>()
        .map_err(|_| ValidationError::field("id", format!("must be an integer, got '{}'", raw)))
}

/// Parse `page` and `size` from the query string, applying defaults and bounds
pub fn parse_list_query(page: Option<&str>, size: Option<&str>) -> Result<ListQuery, ValidationError> {
    let mut errors = Vec::new();

    let page = parse_bounded(
        "page",
        page,
        ListQuery::DEFAULT_PAGE,
        1,
        ListQuery::MAX_PAGE,
        &mut errors,
    );
    let size = parse_bounded(
        "size",
        size,
        ListQuery::DEFAULT_SIZE,
        1,
        ListQuery::MAX_SIZE,
        &mut errors,
    );

    if errors.is_empty() {
        Ok(ListQuery { page, size })
    } else {
        Err(ValidationError::new(errors))
    }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload
        .as_object()
        .ok_or_else(|| ValidationError::field("body", "must be a JSON object"))
}

fn check_name(value: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let Some(name) = value.as_str() else {
        errors.push(FieldError::new("name", "must be a string"));
        return None;
    };

    let length = name.chars().count();
    if length < NAME_MIN_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("must be at least {} character long", NAME_MIN_LENGTH),
        ));
        return None;
    }
    if length > NAME_MAX_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("must be at most {} characters long", NAME_MAX_LENGTH),
        ));
        return None;
    }

    Some(name.to_string())
}

/// `Some(None)` for an explicit null, `Some(Some(_))` for a string
fn check_description(value: &Value, errors: &mut Vec<FieldError>) -> Option<Option<String>> {
    match value {
        Value::Null => Some(None),
        Value::String(text) => Some(Some(text.clone())),
        _ => {
            errors.push(FieldError::new("description", "must be a string or null"));
            None
        }
    }
}

fn parse_bounded(
    field: &str,
    raw: Option<&str>,
    default: u64,
    min: u64,
    max: u64,
    errors: &mut Vec<FieldError>,
) -> u64 {
    let Some(raw) = raw else {
        return default;
    };
    let Ok(value) = raw.parse::<i64>() else {
        errors.push(FieldError::new(
            field,
            format!("must be an integer, got '{}'", raw),
        ));
        return default;
    };

    match u64::try_from(value) {
        Ok(value) if (min..=max).contains(&value) => value,
        _ => {
            errors.push(FieldError::new(
                field,
                format!("must be between {} and {}", min, max),
            ));
            default
        }
    }
}
