//! Error types for search-toolkit.
//!
//! Every failure surfaces to the caller; nothing here is retried or
//! swallowed. API keys never appear in error messages.

use std::path::PathBuf;

/// Errors produced by the search, fetch and diagram operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure or a non-2xx response from a provider.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A provider answered with a body that does not match its schema.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid or incomplete configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Reading or writing a local file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The diagram could not be rasterized or encoded.
    #[error("render error: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // reqwest includes the full URL in its Display, which may carry an API key.
        Self::Http(err.without_url().to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
