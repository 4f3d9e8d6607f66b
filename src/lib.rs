//! search-toolkit: small web utilities
//!
//! Normalized web search over DuckDuckGo, the Google Custom Search API and
//! the Bing Web Search API; page fetching with HTML-to-text extraction; and
//! a layered-circle diagram renderer.

pub mod config;
pub mod content;
pub mod diagram;
pub mod engines;
pub mod error;
pub mod network;
pub mod results;
pub mod search;

pub use config::{Provider, SafeSearch, SearchConfig, Settings};
pub use content::{extract_text, fetch_and_save};
pub use diagram::{draw, DiagramSpec};
pub use error::{Error, Result};
pub use results::SearchResult;
pub use search::{search, WebSearch};
