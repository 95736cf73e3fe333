use std::collections::HashMap;

/// Trait for providing environment variable access
///
/// Settings are read through this seam so tests can supply values without
/// touching the process environment, which parallel tests would race on.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Environment provider backed by an in-memory map
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl EnvironmentProvider for MapEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_environment_provider() {
        let provider = SystemEnvironment;

        unsafe {
            std::env::set_var("SCAFFOLD_TEST_VAR_12345", "test_value");
        }

        assert_eq!(provider.get_var("SCAFFOLD_TEST_VAR_12345"), Some("test_value".to_string()));
        assert_eq!(provider.get_var("NON_EXISTENT_VAR_98765"), None);

        unsafe {
            std::env::remove_var("SCAFFOLD_TEST_VAR_12345");
        }
    }

    #[test]
    fn test_map_environment_provider() {
        let provider = MapEnvironment::empty()
            .with_var("TEST_KEY", "test_value")
            .with_var("ANOTHER_KEY", "another_value");

        assert_eq!(provider.get_var("TEST_KEY"), Some("test_value".to_string()));
        assert_eq!(provider.get_var("ANOTHER_KEY"), Some("another_value".to_string()));
        assert_eq!(provider.get_var("NON_EXISTENT"), None);
    }

    #[test]
    fn test_map_environment_from_map() {
        let provider = MapEnvironment::new(HashMap::from([
            ("KEY1".to_string(), "value1".to_string()),
        ]));

        assert_eq!(provider.get_var("KEY1"), Some("value1".to_string()));
        assert_eq!(provider.get_var("KEY2"), None);
    }
}
