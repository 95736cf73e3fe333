use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Response model for health check endpoint
#[derive(Object, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,

    /// Deployment environment name
    pub environment: String,
}

/// Error body for not-found and internal failures
#[derive(Object, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Short error description
    pub error: String,

    /// Underlying error message, present on internal failures
    #[oai(skip_serializing_if_is_none)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

/// A single field-level validation problem
#[derive(Object, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldErrorDetail {
    /// Offending field (`body` when the payload itself is malformed)
    pub field: String,

    /// What is wrong with it
    pub message: String,
}

/// Error body for rejected input
#[derive(Object, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationErrorResponse {
    /// Short error description
    pub error: String,

    /// Field-level problems
    pub details: Vec<FieldErrorDetail>,
}
