use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Settings read once at process startup and handed to the server
#[derive(Clone)]
pub struct AppSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    environment: String,
    cors_origins: Vec<String>,
}

impl AppSettings {
    /// Load settings through the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://items.db?mode=rwc")
            .min_length(1)
            .load()?;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load()?;

        let port_value = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("8787")
            .load()?;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let environment = ConfigSpec::new(env_provider.clone())
            .env_override("ENVIRONMENT")
            .default_value("development")
            .min_length(1)
            .load()?;

        let cors_value = ConfigSpec::new(env_provider)
            .env_override("CORS_ORIGINS")
            .default_value("*")
            .load()?;
        let mut cors_origins = ConfigSpec::parse_list(&cors_value);
        if cors_origins.is_empty() {
            cors_origins.push("*".to_string());
        }

        Ok(Self {
            database_url,
            server_host,
            server_port,
            environment,
            cors_origins,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Allowed CORS origins; `["*"]` allows any origin
    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("environment", &self.environment)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnvironment;

    fn settings(vars: &[(&str, &str)]) -> Result<AppSettings, ApplicationError> {
        AppSettings::from_env_provider(Arc::new(MapEnvironment::empty().with_vars(vars)))
    }

    #[test]
    fn test_app_settings_with_defaults() {
        let settings = settings(&[]).unwrap();

        assert_eq!(settings.database_url(), "sqlite://items.db?mode=rwc");
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 8787);
        assert_eq!(settings.server_address(), "0.0.0.0:8787");
        assert_eq!(settings.environment(), "development");
        assert_eq!(settings.cors_origins(), ["*".to_string()]);
        assert!(settings.allows_any_origin());
    }

    #[test]
    fn test_app_settings_with_all_vars() {
        let settings = settings(&[
            ("DATABASE_URL", "sqlite://test.db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ENVIRONMENT", "production"),
            ("CORS_ORIGINS", "https://app.example.com, https://admin.example.com"),
        ])
        .unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.environment(), "production");
        assert_eq!(
            settings.cors_origins(),
            ["https://app.example.com".to_string(), "https://admin.example.com".to_string()]
        );
        assert!(!settings.allows_any_origin());
    }

    #[test]
    fn test_empty_cors_list_allows_any_origin() {
        let settings = settings(&[("CORS_ORIGINS", " , ")]).unwrap();
        assert!(settings.allows_any_origin());
    }

    #[test]
    fn test_empty_database_url_fails_validation() {
        match settings(&[("DATABASE_URL", "")]).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("must be at least 1 characters long"));
            }
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port() {
        match settings(&[("PORT", "not_a_number")]).unwrap_err() {
            ApplicationError::ParseError { setting_name, error } => {
                assert_eq!(setting_name, "PORT");
                assert!(error.contains("Expected port number (1-65535)"));
            }
            other => panic!("Expected ParseError for PORT, got: {:?}", other),
        }

        assert!(matches!(
            settings(&[("PORT", "0")]),
            Err(ApplicationError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_empty_host_fails_validation() {
        match settings(&[("HOST", "")]).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "HOST");
                assert!(reason.contains("cannot be empty"));
            }
            other => panic!("Expected InvalidSetting for HOST, got: {:?}", other),
        }
    }

    #[test]
    fn test_debug_format() {
        let debug_str = format!("{:?}", settings(&[("DATABASE_URL", "sqlite://test.db")]).unwrap());
        assert!(debug_str.contains("sqlite://test.db"));
        assert!(debug_str.contains("environment"));
    }
}
