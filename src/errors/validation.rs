use thiserror::Error;

/// A single problem with one input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Rejected request input, carrying every field-level problem found
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", summarize(.details))]
pub struct ValidationError {
    pub details: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(details: Vec<FieldError>) -> Self {
        Self { details }
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldError::new(field, message)])
    }
}

#[cfg(test)]
impl ValidationError {
    /// Whether any detail refers to `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.details.iter().any(|d| d.field == field)
    }
}

fn summarize(details: &[FieldError]) -> String {
    details
        .iter()
        .map(|d| format!("{}: {}", d.field, d.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_all_fields() {
        let err = ValidationError::new(vec![
            FieldError::new("name", "is required"),
            FieldError::new("description", "must be a string or null"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: name: is required; description: must be a string or null"
        );
        assert!(err.has_field("name"));
        assert!(!err.has_field("id"));
    }
}
