//! Configuration module for shiori
//!
//! Configuration comes from two places: an optional TOML file with crawler
//! behavior settings, and the seed URL, which is taken from the command line
//! or the `BASE_URL` environment variable. The seed is required; everything
//! else has defaults.

mod parser;
mod types;
mod validation;

pub use parser::{load_config, load_config_with_hash, parse_seed, resolve_seed};
pub use types::{Config, CrawlerConfig};
pub use validation::validate;
