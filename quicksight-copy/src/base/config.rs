use std::collections::HashMap;

/// Flat string settings shared by the CLI and the client configuration.
///
/// Keys mirror their environment variable names (`AWS_REGION`,
/// `AWS_ACCESS_KEY_ID`, ...) once `validate_config` has completed them;
/// the CLI inserts the raw flag values under their lowercase flag names.
#[derive(Clone, Default, Debug)]
pub struct EnvironmentConfig {
    settings: HashMap<String, String>,
}

impl EnvironmentConfig {
    pub fn new(settings: HashMap<String, String>) -> EnvironmentConfig {
        EnvironmentConfig { settings }
    }

    // shortcut method to create a Config with a single key-value pair
    pub fn with_setting(key: String, value: String) -> EnvironmentConfig {
        let mut settings = HashMap::new();
        settings.insert(key, value);
        EnvironmentConfig { settings }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.settings.get(key)
    }

    /// Like `get`, but treats an empty value as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.settings
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.settings.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_non_empty() {
        let mut config =
            EnvironmentConfig::with_setting("region".into(), "".into());
        assert_eq!(config.get("region").map(String::as_str), Some(""));
        assert_eq!(config.get_non_empty("region"), None);

        config.insert("region".into(), "eu-west-1".into());
        assert_eq!(config.get_non_empty("region"), Some("eu-west-1"));
        assert!(config.contains_key("region"));
        assert!(!config.contains_key("AWS_REGION"));
    }
}
