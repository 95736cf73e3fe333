use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Load logging configuration from the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let log_level = ConfigSpec::new(env_provider.clone())
            .env_override("LOG_LEVEL")
            .default_value("INFO")
            .min_length(1)
            .load()?;

        let app_log_file = ConfigSpec::new(env_provider)
            .env_override("APP_LOG_FILE")
            .load_optional()?
            .map(PathBuf::from);

        Ok(Self {
            log_level,
            app_log_file,
        })
    }

    /// Load logging configuration from environment variables
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),

    #[error("Invalid logging configuration: {0}")]
    Config(#[from] ApplicationError),
}

/// Initialize the tracing subscriber with console and optional file output
/// Reads configuration from environment variables automatically
pub fn init_logging() -> Result<(), LoggingError> {
    init_logging_with(&LoggingConfig::from_env()?)
}

/// Initialize the tracing subscriber from an explicit configuration
pub fn init_logging_with(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry()
        .with(console_layer);

    if let Some(log_file_path) = &config.app_log_file {
        if let Some(parent) = log_file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Daily rotation
        let file_appender = tracing_appender::rolling::daily(
            log_file_path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            log_file_path.file_name()
                .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?,
        );

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnvironment;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::from_env_provider(Arc::new(MapEnvironment::empty())).unwrap();
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.app_log_file, None);
    }

    #[test]
    fn test_logging_config_from_vars() {
        let env = MapEnvironment::empty()
            .with_var("LOG_LEVEL", "scaffold_backend=debug,poem=info")
            .with_var("APP_LOG_FILE", "logs/app.log");
        let config = LoggingConfig::from_env_provider(Arc::new(env)).unwrap();
        assert_eq!(config.log_level, "scaffold_backend=debug,poem=info");
        assert_eq!(config.app_log_file, Some(PathBuf::from("logs/app.log")));
    }

    #[test]
    fn test_empty_log_file_means_console_only() {
        let env = MapEnvironment::empty().with_var("APP_LOG_FILE", "");
        let config = LoggingConfig::from_env_provider(Arc::new(env)).unwrap();
        assert_eq!(config.app_log_file, None);
    }

    #[test]
    fn test_empty_log_level_is_rejected() {
        let env = MapEnvironment::empty().with_var("LOG_LEVEL", "");
        assert!(LoggingConfig::from_env_provider(Arc::new(env)).is_err());
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let config = LoggingConfig {
            log_level: "scaffold_backend=notalevel".to_string(),
            app_log_file: None,
        };
        assert!(matches!(init_logging_with(&config), Err(LoggingError::InvalidLogLevel(_))));
    }
}
