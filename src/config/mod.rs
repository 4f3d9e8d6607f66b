//! Configuration module for search-toolkit
//!
//! Settings come from a YAML file and `WEB_SEARCH_*` / provider key
//! environment variables. There is no global instance: callers build a
//! `Settings` or `SearchConfig` value and pass it where it is needed.

mod settings;

pub use settings::*;
