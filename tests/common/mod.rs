// Common test utilities for integration tests
#![allow(dead_code)]

use migration::{ItemsMigrator, MigratorTrait};
use scaffold_backend::app_data::AppData;
use scaffold_backend::config::{AppSettings, MapEnvironment};
use scaffold_backend::types::input::CreateItemInput;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// Creates an in-memory items database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemsMigrator::up(&db, None)
        .await
        .expect("Failed to run items migrations");

    db
}

/// Settings as a test deployment would see them
pub fn test_settings() -> AppSettings {
    test_settings_with(&[])
}

/// Test settings with extra variables layered on top
pub fn test_settings_with(vars: &[(&str, &str)]) -> AppSettings {
    let env = MapEnvironment::empty()
        .with_var("DATABASE_URL", "sqlite::memory:")
        .with_var("HOST", "127.0.0.1")
        .with_var("ENVIRONMENT", "test")
        .with_vars(vars);
    AppSettings::from_env_provider(Arc::new(env)).expect("Failed to build test settings")
}

/// AppData over a fresh in-memory database
pub async fn setup_test_app_data() -> AppData {
    AppData::from_connection(test_settings(), setup_test_db().await)
}

pub fn create_input(name: &str, description: Option<&str>) -> CreateItemInput {
    CreateItemInput {
        name: name.to_string(),
        description: description.map(str::to_string),
    }
}
