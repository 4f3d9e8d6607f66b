//! Google Custom Search JSON API adapter

use super::traits::*;
use crate::config::{Provider, SafeSearch, SearchConfig};
use crate::error::{Error, Result};
use crate::network::{accept_json, HttpClient};
use crate::results::{limit_results, SearchResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// The API refuses `num` above this
const MAX_PAGE_SIZE: usize = 10;

/// Response body; `items` is absent when nothing matched
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: String,
    link: String,
    // Some items (e.g. bare PDFs) come without a snippet
    #[serde(default)]
    snippet: String,
}

/// Google Custom Search adapter
pub struct Google {
    client: HttpClient,
    base_url: String,
}

impl Google {
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

    /// Build the API request; fails when credentials are missing
    pub fn request(&self, query: &str, config: &SearchConfig) -> Result<EngineRequest> {
        let api_key = config
            .google_api_key
            .as_deref()
            .ok_or_else(|| Error::Config("google provider requires an API key".to_string()))?;
        let engine_id = config.google_search_engine_id.as_deref().ok_or_else(|| {
            Error::Config("google provider requires a search engine id".to_string())
        })?;

        let num = config.max_results.min(MAX_PAGE_SIZE);
        let safe = match config.safesearch {
            SafeSearch::Strict => "active",
            _ => "off",
        };

        let mut request = EngineRequest::get(&self.base_url)
            .param("key", api_key)
            .param("cx", engine_id)
            .param("q", query)
            .param("num", num.to_string())
            .param("safe", safe)
            .header("Accept", accept_json());

        if let Some(country) = config.region_country() {
            request = request.param("gl", country);
        }
        if let Some(lang) = config.region_language() {
            request = request.lang(lang);
        }

        Ok(request)
    }

    /// Map the API response into normalized results
    pub fn response(&self, response: EngineResponse, max_results: usize) -> Result<Vec<SearchResult>> {
        let response = response.error_for_status(self.name())?;
        let body: SearchResponse = response.json(self.name())?;

        let results = body
            .items
            .into_iter()
            .map(|item| SearchResult::new(item.title, item.link, item.snippet))
            .collect();

        Ok(limit_results(results, max_results))
    }
}

#[async_trait]
impl SearchProvider for Google {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    async fn search(&self, query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
        let request = self.request(query, config)?;
        if config.max_results == 0 {
            return Ok(Vec::new());
        }

        let response = self.client.execute(request).await?;
        let results = self.response(response, config.max_results)?;
        debug!("google returned {} results", results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn google() -> Google {
        Google::new(HttpClient::new().unwrap())
    }

    fn config() -> SearchConfig {
        SearchConfig::new(Provider::Google).with_google_credentials("key-123", "cx-456")
    }

    fn ok(body: &str) -> EngineResponse {
        EngineResponse {
            status: 200,
            text: body.to_string(),
            url: API_URL.to_string(),
        }
    }

    #[test]
    fn test_google_request() {
        let request = google()
            .request("rust programming", &config().with_max_results(25).with_region("de-de"))
            .unwrap();

        assert!(request.url.contains("googleapis.com"));
        assert_eq!(request.param_value("q"), Some("rust programming"));
        assert_eq!(request.param_value("key"), Some("key-123"));
        assert_eq!(request.param_value("cx"), Some("cx-456"));
        assert_eq!(request.param_value("num"), Some("10"));
        assert_eq!(request.param_value("gl"), Some("de"));
        assert_eq!(request.lang, "de");
    }

    #[test]
    fn test_missing_credentials() {
        let no_key = SearchConfig::new(Provider::Google);
        assert!(matches!(google().request("q", &no_key), Err(Error::Config(_))));

        let mut no_cx = config();
        no_cx.google_search_engine_id = None;
        assert!(matches!(google().request("q", &no_cx), Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_items() {
        let body = r#"{"items":[{"title":"T","link":"L","snippet":"S"}]}"#;
        let results = google().response(ok(body), 10).unwrap();
        assert_eq!(results, vec![SearchResult::new("T", "L", "S")]);
    }

    #[test]
    fn test_missing_items_is_empty() {
        let body = r#"{"kind":"customsearch#search","searchInformation":{"totalResults":"0"}}"#;
        assert!(google().response(ok(body), 10).unwrap().is_empty());
    }

    #[test]
    fn test_item_without_link_is_parse_error() {
        let body = r#"{"items":[{"title":"T","snippet":"S"}]}"#;
        let err = google().response(ok(body), 10).unwrap_err();
        assert!(matches!(err, Error::Parse(ref m) if m.contains("link")));
    }
}
