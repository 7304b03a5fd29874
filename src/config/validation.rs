use crate::config::types::Config;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let crawler = &config.crawler;

    if crawler.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be >= 1, got {}",
            crawler.max_pages
        )));
    }

    if crawler.max_concurrent_fetches < 1 || crawler.max_concurrent_fetches > 100 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-fetches must be between 1 and 100, got {}",
            crawler.max_concurrent_fetches
        )));
    }

    if crawler.fetch_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "fetch-timeout-ms must be >= 100ms, got {}ms",
            crawler.fetch_timeout_ms
        )));
    }

    if crawler.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
