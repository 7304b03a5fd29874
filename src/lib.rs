//! Shiori: a same-origin title crawler
//!
//! This crate implements a web crawler that starts from a single seed URL,
//! collects page titles, and follows links only within the seed's network
//! location until a page ceiling is reached or no unvisited links remain.

pub mod config;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Main error type for shiori operations
#[derive(Debug, Error)]
pub enum ShioriError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
///
/// This is the only error class that aborts a run; everything else is
/// isolated at the page boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("No seed URL given: pass one as an argument or set BASE_URL")]
    MissingSeed,
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Malformed link reference: {0}")]
    Malformed(String),
}

/// Result type alias for shiori operations
pub type Result<T> = std::result::Result<T, ShioriError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{crawl, CrawlSummary};
pub use crate::url::{is_in_scope, resolve};
