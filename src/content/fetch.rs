//! Fetch a page and save its visible text

use super::extract::extract_text;
use crate::error::{Error, Result};
use crate::network::HttpClient;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Visible text of one fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// The URL that was requested
    pub url: String,
    /// HTTP status of the response
    pub status: u16,
    /// Extracted text
    pub text: String,
}

impl PageContent {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Downloads pages and writes their text to disk
#[derive(Clone)]
pub struct PageFetcher {
    client: HttpClient,
}

impl PageFetcher {
    /// Create a fetcher with a default HTTP client
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(HttpClient::new()?))
    }

    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// GET the page and extract its text
    ///
    /// Any status code is accepted; the body is extracted as-is. Only a
    /// transport failure is an error.
    pub async fn fetch_text(&self, url: &str) -> Result<PageContent> {
        let response = self.client.get(url).await?;
        debug!("{} answered {} (final url {})", url, response.status, response.url);

        Ok(PageContent {
            url: url.to_string(),
            status: response.status,
            text: extract_text(&response.text),
        })
    }

    /// GET the page and write its text to `output`, replacing any existing file
    pub async fn fetch_and_save(&self, url: &str, output: impl AsRef<Path>) -> Result<PathBuf> {
        let output = output.as_ref();
        let page = self.fetch_text(url).await?;

        tokio::fs::write(output, page.text.as_bytes())
            .await
            .map_err(|e| Error::io(output, e))?;

        info!(
            "Saved {} words from {} to {}",
            page.word_count(),
            url,
            output.display()
        );
        Ok(output.to_path_buf())
    }
}

/// Fetch `url` with a default client and save its text to `output_filename`
pub async fn fetch_and_save(url: &str, output_filename: impl AsRef<Path>) -> Result<PathBuf> {
    PageFetcher::new()?.fetch_and_save(url, output_filename).await
}
