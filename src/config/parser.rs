use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use magpie::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Pages directory: {}", config.output.pages_dir);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
user-agent = "TestBot/1.0"
fetch-timeout-secs = 10
deny-keywords = ["login", "userlogin", "signup"]
max-store-failures = 3

[output]
pages-dir = "./test-pages"
database-path = "./test.db"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.user_agent, "TestBot/1.0");
        assert_eq!(config.crawler.fetch_timeout_secs, 10);
        assert_eq!(config.crawler.deny_keywords.len(), 3);
        assert_eq!(config.output.pages_dir, "./test-pages");
        assert_eq!(config.output.database_path, "./test.db");
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.user_agent, "Mozilla/5.0");
        assert_eq!(config.crawler.fetch_timeout_secs, 30);
        assert_eq!(config.crawler.deny_keywords, vec!["login", "userlogin"]);
        assert_eq!(config.output.pages_dir, "./pages");
    }

    #[test]
    fn test_load_partial_config() {
        let config_content = r#"
[output]
pages-dir = "/var/magpie/pages"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output.pages_dir, "/var/magpie/pages");
        // Unset sections fall back to defaults
        assert_eq!(config.output.database_path, "./links.db");
        assert_eq!(config.crawler.max_store_failures, 5);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawler]
fetch-timeout-secs = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
