use thiserror::Error;

pub mod database;

pub use database::DatabaseError;

/// Internal error type for store and startup operations
///
/// Not exposed via API - endpoints must convert to `ItemError`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_message_names_operation() {
        let err = InternalError::database("list_items", sea_orm::DbErr::Custom("disk full".to_string()));
        let message = err.to_string();
        assert!(message.contains("list_items"));
        assert!(message.contains("disk full"));
    }

    #[test]
    fn test_migration_error_converts() {
        let err: InternalError = DatabaseError::Migration {
            source: sea_orm::DbErr::Custom("bad schema".to_string()),
        }
        .into();
        assert!(err.to_string().starts_with("Running migrations failed"));
    }
}
