//! Search facade: picks one adapter and runs queries through it

use crate::config::{Provider, SearchConfig};
use crate::engines::{Bing, DuckDuckGo, Google, SearchProvider, TextSearch};
use crate::error::Result;
use crate::network::HttpClient;
use crate::results::SearchResult;
use std::sync::Arc;
use tracing::info;

/// Single entry point over the configured provider
///
/// The adapter is chosen once, in the constructor. The config is owned, so
/// the provider cannot change under a running query; to switch providers,
/// build another `WebSearch`.
pub struct WebSearch {
    config: SearchConfig,
    client: HttpClient,
    provider: Box<dyn SearchProvider>,
}

impl WebSearch {
    /// Create a facade with a default HTTP client
    pub fn new(config: SearchConfig) -> Result<Self> {
        Ok(Self::with_client(config, HttpClient::new()?))
    }

    /// Create a facade around a configured HTTP client
    pub fn with_client(config: SearchConfig, client: HttpClient) -> Self {
        let provider: Box<dyn SearchProvider> = match config.provider {
            Provider::DuckDuckGo => Box::new(DuckDuckGo::new(client.clone())),
            Provider::Google => Box::new(Google::new(client.clone())),
            Provider::Bing => Box::new(Bing::new(client.clone())),
        };

        Self {
            config,
            client,
            provider,
        }
    }

    /// Use a custom text search backend for the scraped provider
    pub fn with_text_search(config: SearchConfig, backend: Arc<dyn TextSearch>) -> Result<Self> {
        Ok(Self {
            config: config.with_provider(Provider::DuckDuckGo),
            client: HttpClient::new()?,
            provider: Box::new(DuckDuckGo::with_backend(backend)),
        })
    }

    /// Send API requests to another base URL
    ///
    /// Only affects the key-based providers; the scraped provider keeps its
    /// backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let client = self.client.clone();
        match self.config.provider {
            Provider::Google => {
                self.provider = Box::new(Google::new(client).with_base_url(base_url));
            }
            Provider::Bing => {
                self.provider = Box::new(Bing::new(client).with_base_url(base_url));
            }
            Provider::DuckDuckGo => {}
        }
        self
    }

    /// Run one query against the configured provider
    pub async fn search_query(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        info!("Searching '{}' on {}", query, self.provider.name());
        let results = self.provider.search(query, &self.config).await?;
        info!("{} returned {} results", self.provider.name(), results.len());

        Ok(results)
    }

    /// Provider this facade dispatches to
    pub fn provider(&self) -> Provider {
        self.provider.provider()
    }

    /// Config the facade was built with
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
