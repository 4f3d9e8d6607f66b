//! Page content: fetching pages and reducing HTML to readable text

mod extract;
mod fetch;

pub use extract::extract_text;
pub use fetch::{fetch_and_save, PageContent, PageFetcher};
