use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::config::{connect_database, migrate_database, AppSettings};
use crate::stores::ItemStore;
use crate::errors::InternalError;

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once in main.rs and shared by the API structs.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings)
///   ↓ creates once
///   ├─ settings (AppSettings)
///   ├─ db (DatabaseConnection, pooled, cheap to clone)
///   └─ item_store (Arc<ItemStore>)
///   ↓ passed to api::build_app
///   ├─ HealthApi::new(environment)
///   └─ ItemsApi::new(db, item_store)
/// ```
pub struct AppData {
    pub settings: AppSettings,
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Connect to the configured database, run migrations and create the stores
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the connection or a migration fails
    pub async fn init(settings: AppSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let db = connect_database(settings.database_url()).await?;
        migrate_database(&db).await?;

        tracing::info!("AppData initialization complete");

        Ok(Self::from_connection(settings, db))
    }

    /// Build application data around an already migrated connection
    pub fn from_connection(settings: AppSettings, db: DatabaseConnection) -> Self {
        Self {
            settings,
            db,
            item_store: Arc::new(ItemStore::new()),
        }
    }
}
