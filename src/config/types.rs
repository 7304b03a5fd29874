use serde::Deserialize;

/// Main configuration structure for shiori
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages ever fetched in one run
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u64,

    /// Number of concurrent fetch workers
    #[serde(
        rename = "max-concurrent-fetches",
        default = "default_max_concurrent_fetches"
    )]
    pub max_concurrent_fetches: u32,

    /// Per-request timeout in milliseconds
    #[serde(rename = "fetch-timeout-ms", default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_max_pages() -> u64 {
    10_000
}

fn default_max_concurrent_fetches() -> u32 {
    8
}

fn default_fetch_timeout_ms() -> u64 {
    5_000
}

fn default_user_agent() -> String {
    format!("shiori/{}", env!("CARGO_PKG_VERSION"))
}
