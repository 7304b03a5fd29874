use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;
use url::Url;

/// Environment variable consulted for the seed URL when no argument is given
pub const SEED_ENV_VAR: &str = "BASE_URL";

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
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a run can be tied back to the exact configuration
/// that produced it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Parses and checks a seed URL string
///
/// The seed must be an absolute HTTP or HTTPS URL; it defines the network
/// location every discovered link is filtered against.
pub fn parse_seed(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidSeed {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidSeed {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

/// Resolves the seed URL from an explicit argument or the environment
///
/// The command-line argument wins; the `BASE_URL` environment variable is
/// the fallback. Having neither is a fatal startup error.
pub fn resolve_seed(explicit: Option<&str>) -> Result<Url, ConfigError> {
    match explicit {
        Some(raw) => parse_seed(raw),
        None => match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => parse_seed(&raw),
            Err(_) => Err(ConfigError::MissingSeed),
        },
    }
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
max-pages = 250
max-concurrent-fetches = 4
fetch-timeout-ms = 2000
user-agent = "shiori-test/0.1"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_pages, 250);
        assert_eq!(config.crawler.max_concurrent_fetches, 4);
        assert_eq!(config.crawler.fetch_timeout_ms, 2000);
        assert_eq!(config.crawler.user_agent, "shiori-test/0.1");
    }

    #[test]
    fn test_load_config_applies_defaults() {
        let file = create_temp_config("[crawler]\nmax-pages = 7\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_pages, 7);
        assert_eq!(config.crawler.max_concurrent_fetches, 8);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[crawler]\nmax-pages = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_parse_seed_valid() {
        let url = parse_seed("https://example.com/start").unwrap();
        assert_eq!(url.as_str(), "https://example.com/start");
    }

    #[test]
    fn test_parse_seed_http_allowed() {
        assert!(parse_seed("http://example.com/").is_ok());
    }

    #[test]
    fn test_parse_seed_rejects_foreign_scheme() {
        let result = parse_seed("ftp://example.com/");
        assert!(matches!(result, Err(ConfigError::InvalidSeed { .. })));
    }

    #[test]
    fn test_parse_seed_rejects_relative() {
        let result = parse_seed("/just/a/path");
        assert!(matches!(result, Err(ConfigError::InvalidSeed { .. })));
    }

    #[test]
    fn test_resolve_seed_prefers_explicit() {
        let url = resolve_seed(Some("https://example.com/")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }
}
