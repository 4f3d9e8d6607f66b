//! Search module
//!
//! `WebSearch` selects the adapter for the configured provider and exposes
//! a single query entry point.

mod executor;

pub use executor::WebSearch;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::results::SearchResult;

/// Run one query with a throwaway facade
pub async fn search(config: &SearchConfig, query: &str) -> Result<Vec<SearchResult>> {
    WebSearch::new(config.clone())?.search_query(query).await
}
