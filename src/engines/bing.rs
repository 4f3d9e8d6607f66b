//! Bing Web Search API (v7) adapter

use super::traits::*;
use crate::config::{Provider, SafeSearch, SearchConfig};
use crate::error::{Error, Result};
use crate::network::{accept_json, HttpClient};
use crate::results::{limit_results, SearchResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const API_URL: &str = "https://api.bing.microsoft.com/v7.0/search";
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// The API caps `count` at 50
const MAX_PAGE_SIZE: usize = 50;

/// Response body; `webPages` is absent when nothing matched
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    web_pages: Option<WebPages>,
}

#[derive(Debug, Deserialize)]
struct WebPages {
    #[serde(default)]
    value: Vec<WebPage>,
}

#[derive(Debug, Deserialize)]
struct WebPage {
    name: String,
    url: String,
    #[serde(default)]
    snippet: String,
}

/// Bing Web Search adapter
pub struct Bing {
    client: HttpClient,
    base_url: String,
}

impl Bing {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: API_URL.to_string(),
        }
    }

    /// Point the adapter at another endpoint
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the API request; fails when the key is missing
    pub fn request(&self, query: &str, config: &SearchConfig) -> Result<EngineRequest> {
        let api_key = config
            .bing_api_key
            .as_deref()
            .ok_or_else(|| Error::Config("bing provider requires an API key".to_string()))?;

        let safe_search = match config.safesearch {
            SafeSearch::Off => "Off",
            SafeSearch::Moderate => "Moderate",
            SafeSearch::Strict => "Strict",
        };

        let mut request = EngineRequest::get(&self.base_url)
            .param("q", query)
            .param("count", config.max_results.min(MAX_PAGE_SIZE).to_string())
            .param("safeSearch", safe_search)
            .header(KEY_HEADER, api_key)
            .header("Accept", accept_json());

        // Bing markets are `<language>-<COUNTRY>`, the reverse of the region form
        if let (Some(country), Some(lang)) = (config.region_country(), config.region_language()) {
            request = request
                .param("mkt", format!("{}-{}", lang, country.to_ascii_uppercase()))
                .lang(lang);
        }

        Ok(request)
    }

    /// Map the API response into normalized results
    pub fn response(&self, response: EngineResponse, max_results: usize) -> Result<Vec<SearchResult>> {
        let response = response.error_for_status(self.name())?;
        let body: SearchResponse = response.json(self.name())?;

        let results = body
            .web_pages
            .map(|pages| pages.value)
            .unwrap_or_default()
            .into_iter()
            .map(|page| SearchResult::new(page.name, page.url, page.snippet))
            .collect();

        Ok(limit_results(results, max_results))
    }
}

#[async_trait]
impl SearchProvider for Bing {
    fn provider(&self) -> Provider {
        Provider::Bing
    }

    async fn search(&self, query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
        let request = self.request(query, config)?;
        if config.max_results == 0 {
            return Ok(Vec::new());
        }

        let response = self.client.execute(request).await?;
        let results = self.response(response, config.max_results)?;
        debug!("bing returned {} results", results.len());
        Ok(results)
    }
}
