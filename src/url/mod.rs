//! URL handling module for shiori
//!
//! This module provides link resolution (turning raw href attribute values
//! into absolute URLs) and the same-origin scope filter that decides which
//! discovered links are eligible for crawling.

mod resolve;
mod scope;

pub use resolve::resolve;
pub use scope::is_in_scope;
