//! Crawler coordinator - main crawl orchestration logic
//!
//! This module drives the whole crawl:
//! - Seeding the frontier and validating the page ceiling
//! - Running the bounded worker pool
//! - Coordinating fetching, parsing, and link admission per page
//! - Isolating per-page failures so one bad page never ends the run
//! - Producing the final summary

use crate::config::{validate, Config};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::{Admission, Frontier, QueuedPage};
use crate::crawler::parser::parse_page;
use crate::url::{is_in_scope, resolve};
use crate::ShioriError;
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use url::Url;

/// How long an idle worker sleeps before re-polling the frontier
const IDLE_POLL_MS: u64 = 10;

/// Final accounting for one crawl run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Number of URLs dispatched for fetching, failed pages included
    pub total_visited: usize,

    /// Pages fetched and parsed successfully
    pub succeeded: usize,

    /// Pages that hit a fetch or parse failure
    pub failed: usize,
}

/// State shared by every crawl worker
struct CrawlContext {
    frontier: Mutex<Frontier>,
    client: Client,
    seed: Url,
    failed: AtomicUsize,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    context: Arc<CrawlContext>,
    worker_count: usize,
}

impl Coordinator {
    /// Creates a new coordinator for one crawl run
    ///
    /// The configuration is re-validated here so programmatically built
    /// configs hit the same fail-fast path as loaded ones; a zero ceiling
    /// aborts before any fetch.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `seed` - The seed URL; its network location bounds the crawl
    pub fn new(config: Config, seed: Url) -> Result<Self, ShioriError> {
        validate(&config)?;

        let client = build_http_client(&config.crawler)?;

        let mut frontier = Frontier::new(config.crawler.max_pages as usize);
        frontier.admit(seed.clone(), 0);

        Ok(Self {
            context: Arc::new(CrawlContext {
                frontier: Mutex::new(frontier),
                client,
                seed,
                failed: AtomicUsize::new(0),
            }),
            worker_count: config.crawler.max_concurrent_fetches as usize,
        })
    }

    /// Runs the crawl to completion
    ///
    /// Spawns the worker pool and waits for it to drain the frontier.
    /// Workers exit when the queue is empty and nothing is in flight, so an
    /// in-flight page can still refill the queue before anyone gives up.
    pub async fn run(&mut self) -> Result<CrawlSummary, ShioriError> {
        let started = Instant::now();
        tracing::info!(
            "Starting crawl of {} (ceiling: {} pages, {} workers)",
            self.context.seed,
            self.context.frontier.lock().unwrap().ceiling(),
            self.worker_count
        );

        let mut workers = Vec::with_capacity(self.worker_count);
        for worker_id in 0..self.worker_count {
            let context = Arc::clone(&self.context);
            workers.push(tokio::spawn(worker_loop(worker_id, context)));
        }

        for worker in workers {
            if let Err(e) = worker.await {
                tracing::error!("Worker task failed: {}", e);
            }
        }

        let total_visited = self.context.frontier.lock().unwrap().visited_count();
        let failed = self.context.failed.load(Ordering::Relaxed);
        let summary = CrawlSummary {
            total_visited,
            succeeded: total_visited - failed,
            failed,
        };

        tracing::info!(
            "Crawl complete: {} pages visited ({} ok, {} failed) in {:?}",
            summary.total_visited,
            summary.succeeded,
            summary.failed,
            started.elapsed()
        );

        Ok(summary)
    }
}

/// One worker: pull pages off the frontier until the crawl is exhausted
async fn worker_loop(worker_id: usize, context: Arc<CrawlContext>) {
    loop {
        let page = {
            let mut frontier = context.frontier.lock().unwrap();
            if frontier.is_exhausted() {
                break;
            }
            frontier.next()
        };

        match page {
            Some(page) => {
                process_page(&context, &page).await;
                context.frontier.lock().unwrap().complete();
            }
            None => {
                // Queue momentarily empty while another worker's fetch is in
                // flight; poll again shortly.
                tokio::time::sleep(std::time::Duration::from_millis(IDLE_POLL_MS)).await;
            }
        }
    }

    tracing::trace!("Worker {} exiting", worker_id);
}

/// Processes a single admitted page
///
/// Every failure is handled here: a failed page is recorded and skipped, it
/// never propagates to the worker loop.
async fn process_page(context: &CrawlContext, page: &QueuedPage) {
    let ceiling = {
        let frontier = context.frontier.lock().unwrap();
        frontier.ceiling()
    };

    tracing::info!(
        "[{}/{}] Crawling: {} (depth: {})",
        page.ordinal,
        ceiling,
        page.url,
        page.depth
    );

    let fetched = match fetch_page(&context.client, page.url.as_str()).await {
        Ok(fetched) => fetched,
        Err(e) => {
            tracing::warn!("Fetch failed for {}: {}", page.url, e);
            context.failed.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };

    let parsed = match parse_page(&fetched.body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Parse failed for {}: {}", page.url, e);
            context.failed.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };

    match &parsed.title {
        Some(title) => tracing::info!("Title of {}: {}", page.url, title),
        None => tracing::info!("Title of {}: not found", page.url),
    }

    handle_discovered_links(context, page, &parsed.hrefs);
}

/// Resolves, filters, and admits the raw links discovered on a page
///
/// Hrefs are handled in document order. An unresolvable href is skipped
/// silently; an out-of-scope URL is skipped; a duplicate is skipped; and
/// once the ceiling is hit the rest of the page's links are dropped without
/// being attempted.
fn handle_discovered_links(context: &CrawlContext, page: &QueuedPage, hrefs: &[String]) {
    for href in hrefs {
        let resolved = match resolve(&page.url, href) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::debug!("Skipping unresolvable href on {}: {}", page.url, e);
                continue;
            }
        };

        if !is_in_scope(&context.seed, &resolved) {
            tracing::trace!("Out of scope: {}", resolved);
            continue;
        }

        let admission = {
            let mut frontier = context.frontier.lock().unwrap();
            frontier.admit(resolved, page.depth + 1)
        };

        match admission {
            Admission::Admitted | Admission::AlreadyVisited => {}
            Admission::CeilingReached => {
                tracing::debug!(
                    "Page ceiling reached, dropping remaining links on {}",
                    page.url
                );
                break;
            }
        }
    }
}

/// Runs a full crawl with the given configuration and seed URL
///
/// # Example
///
/// ```no_run
/// use shiori::config::{parse_seed, Config};
/// use shiori::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seed = parse_seed("https://example.com/")?;
/// let summary = run_crawl(Config::default(), seed).await?;
/// println!("visited {} pages", summary.total_visited);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config, seed: Url) -> Result<CrawlSummary, ShioriError> {
    let mut coordinator = Coordinator::new(config, seed)?;
    coordinator.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    fn test_config(max_pages: u64) -> Config {
        let mut config = Config::default();
        config.crawler.max_pages = max_pages;
        config.crawler.fetch_timeout_ms = 500;
        config
    }

    #[test]
    fn test_zero_ceiling_rejected_before_any_fetch() {
        let seed = Url::parse("https://example.com/").unwrap();
        let result = Coordinator::new(test_config(0), seed);
        assert!(matches!(
            result,
            Err(ShioriError::Config(ConfigError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_seed_still_completes() {
        // A dead seed is a per-page failure, not a run failure.
        let seed = Url::parse("http://127.0.0.1:1/").unwrap();
        let summary = run_crawl(test_config(5), seed).await.unwrap();
        assert_eq!(summary.total_visited, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 0);
    }
}
