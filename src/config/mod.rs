pub mod app_settings;
pub mod config_spec;
pub mod database;
pub mod env_provider;
pub mod errors;
pub mod logging;

pub use app_settings::AppSettings;
pub use config_spec::ConfigSpec;
pub use database::{connect_database, migrate_database};
pub use env_provider::{EnvironmentProvider, MapEnvironment, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{init_logging, init_logging_with, LoggingConfig, LoggingError};
