use poem_openapi::{ApiResponse, payload::Json};

use crate::errors::internal::InternalError;
use crate::errors::validation::ValidationError;
use crate::types::dto::common::{ErrorResponse, FieldErrorDetail, ValidationErrorResponse};

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// Request input failed validation
    #[oai(status = 400)]
    Validation(Json<ValidationErrorResponse>),

    /// Item does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorResponse>),
}

impl ItemError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemError::NotFound(Json(ErrorResponse::new("Item not found")))
    }

    /// Convert InternalError to ItemError
    ///
    /// The underlying message is passed through to the client.
    pub fn from_internal_error(err: InternalError) -> Self {
        tracing::error!("Item operation failed: {}", err);
        ItemError::Internal(Json(ErrorResponse::with_message(
            "Internal Server Error",
            err.to_string(),
        )))
    }
}

impl From<ValidationError> for ItemError {
    fn from(err: ValidationError) -> Self {
        tracing::debug!("Rejected item request: {}", err);
        ItemError::Validation(Json(ValidationErrorResponse {
            error: "Validation failed".to_string(),
            details: err
                .details
                .into_iter()
                .map(|d| FieldErrorDetail {
                    field: d.field,
                    message: d.message,
                })
                .collect(),
        }))
    }
}

impl From<InternalError> for ItemError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::validation::FieldError;

    #[test]
    fn test_validation_error_maps_to_400_with_details() {
        let err: ItemError = ValidationError::new(vec![
            FieldError::new("name", "must be at least 1 character long"),
        ])
        .into();

        match err {
            ItemError::Validation(Json(body)) => {
                assert_eq!(body.error, "Validation failed");
                assert_eq!(body.details.len(), 1);
                assert_eq!(body.details[0].field, "name");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_body() {
        match ItemError::not_found() {
            ItemError::NotFound(Json(body)) => {
                assert_eq!(body.error, "Item not found");
                assert!(body.message.is_none());
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_internal_error_passes_message_through() {
        let err = ItemError::from_internal_error(InternalError::database(
            "update_item",
            sea_orm::DbErr::Custom("disk full".to_string()),
        ));
        match err {
            ItemError::Internal(Json(body)) => {
                assert_eq!(body.error, "Internal Server Error");
                let message = body.message.unwrap_or_default();
                assert!(message.contains("update_item"));
                assert!(message.contains("disk full"));
            }
            other => panic!("Expected Internal, got {:?}", other),
        }
    }
}
