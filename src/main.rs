//! Shiori main entry point
//!
//! This is the command-line interface for the shiori same-origin title
//! crawler.

use clap::Parser;
use shiori::config::{load_config_with_hash, resolve_seed, validate, Config};
use shiori::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shiori: a same-origin title crawler
///
/// Starting from a seed URL, shiori fetches pages, collects their titles,
/// and follows links that stay on the seed's network location until the
/// page ceiling is reached or no unvisited links remain.
#[derive(Parser, Debug)]
#[command(name = "shiori")]
#[command(version)]
#[command(about = "A same-origin title crawler", long_about = None)]
struct Cli {
    /// Seed URL to crawl from (falls back to the BASE_URL environment
    /// variable)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of pages to fetch (overrides the config file)
    #[arg(long, value_name = "N")]
    max_pages: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration (defaults apply when no file is given)
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((config, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    config
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    validate(&config)?;

    // The seed comes from the command line or BASE_URL; missing both is a
    // fatal startup error.
    let seed = resolve_seed(cli.seed.as_deref())?;

    tracing::info!("Starting crawl from: {}", seed);
    let summary = crawl(config, seed).await?;

    println!(
        "Crawl finished: {} pages visited ({} ok, {} failed)",
        summary.total_visited, summary.succeeded, summary.failed
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shiori=info,warn"),
            1 => EnvFilter::new("shiori=debug,info"),
            2 => EnvFilter::new("shiori=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
