//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler: building the
//! shared client with a user agent and bounded timeouts, fetching page
//! bodies, and classifying transport failures. Every failure here is local
//! to one page; the coordinator records it and moves on.

use crate::config::CrawlerConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// A successfully fetched page
#[derive(Debug)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,

    /// Page body content
    pub body: String,
}

/// Per-page transport failures
///
/// Non-2xx responses are failures under the transport contract: the page
/// counts as visited but contributes no links.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to read body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Other(String),
}

/// Builds the HTTP client shared by all crawl workers
///
/// The request timeout bounds how long any single page can stall a worker;
/// an unresponsive server surfaces as an ordinary per-page fetch failure.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_millis(config.fetch_timeout_ms))
        .connect_timeout(Duration::from_millis(config.fetch_timeout_ms))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - 2xx response with its body
/// * `Err(FetchError)` - Timeout, connection failure, non-2xx status, or a
///   body read failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client.get(url).send().await.map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Body(e.to_string())
        }
    })?;

    Ok(FetchedPage {
        status: status.as_u16(),
        body,
    })
}

/// Classifies a reqwest send error into the transport failure taxonomy
fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Connect(e.to_string())
    } else {
        FetchError::Other(e.to_string())
    }
}
