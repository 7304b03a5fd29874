//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The shared frontier (visited-set, queue, in-flight tracking)
//! - HTTP fetching with bounded timeouts
//! - HTML parsing and raw link extraction
//! - Worker-pool coordination and per-page failure isolation

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{run_crawl, Coordinator, CrawlSummary};
pub use fetcher::{build_http_client, fetch_page, FetchError, FetchedPage};
pub use frontier::{Admission, Frontier, QueuedPage};
pub use parser::{parse_page, ParseError, ParsedPage};

use crate::config::Config;
use crate::ShioriError;
use url::Url;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl: it builds a
/// coordinator for the run, drives the worker pool until the frontier is
/// exhausted or the page ceiling is reached, and returns the summary.
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed` - The seed URL defining the crawl's network location
pub async fn crawl(config: Config, seed: Url) -> Result<CrawlSummary, ShioriError> {
    run_crawl(config, seed).await
}
