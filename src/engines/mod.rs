//! Search provider adapters
//!
//! Defines the `SearchProvider` trait and one adapter per supported backend.

mod traits;

// Provider implementations
pub mod bing;
pub mod duckduckgo;
pub mod google;

pub use bing::Bing;
pub use duckduckgo::{DuckDuckGo, DuckDuckGoHtml, TextHit, TextSearch};
pub use google::Google;
pub use traits::*;
