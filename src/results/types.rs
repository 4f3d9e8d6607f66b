//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single normalized search result
///
/// Every provider adapter produces this shape regardless of the field names
/// its backend uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result
    pub title: String,
    /// The URL of the result
    pub url: String,
    /// Content snippet/description (may be empty)
    pub snippet: String,
}

impl SearchResult {
    /// Create a new result
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }

    /// Borrow the result as a `(title, url, snippet)` triple
    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.title, &self.url, &self.snippet)
    }
}

impl From<SearchResult> for (String, String, String) {
    fn from(result: SearchResult) -> Self {
        (result.title, result.url, result.snippet)
    }
}

/// Cut a provider's list down to the configured bound, keeping order
pub fn limit_results(mut results: Vec<SearchResult>, max_results: usize) -> Vec<SearchResult> {
    results.truncate(max_results);
    results
}
