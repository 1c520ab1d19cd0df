use crate::config::types::{Config, CrawlerConfig, OutputConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.fetch_timeout_secs < 1 || config.fetch_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "fetch-timeout-secs must be between 1 and 300, got {}",
            config.fetch_timeout_secs
        )));
    }

    // An empty keyword is a substring of every URL and would reject all of them
    for keyword in &config.deny_keywords {
        if keyword.is_empty() {
            return Err(ConfigError::Validation(
                "deny-keywords entries cannot be empty".to_string(),
            ));
        }
    }

    if config.max_store_failures < 1 {
        return Err(ConfigError::Validation(format!(
            "max-store-failures must be >= 1, got {}",
            config.max_store_failures
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.pages_dir.is_empty() {
        return Err(ConfigError::Validation(
            "pages-dir cannot be empty".to_string(),
        ));
    }

    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
