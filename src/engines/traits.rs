//! Provider traits and request/response types

use crate::config::{Provider, SearchConfig};
use crate::error::{Error, Result};
use crate::results::SearchResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// HTTP request to be made by an adapter
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Query parameters, sent in insertion order
    pub params: Vec<(String, String)>,
    /// POST body data
    pub data: Option<RequestBody>,
    /// Language used for the Accept-Language header (empty = English)
    pub lang: String,
}

impl EngineRequest {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            params: Vec::new(),
            data: None,
            lang: String::new(),
        }
    }

    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add form data (sets content-type to form-urlencoded)
    pub fn form(mut self, data: Vec<(String, String)>) -> Self {
        self.data = Some(RequestBody::Form(data));
        self
    }

    /// Set the language for Accept-Language
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Case-insensitive header lookup
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Value of a query parameter, if set
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Request body types
#[derive(Debug, Clone)]
pub enum RequestBody {
    Form(Vec<(String, String)>),
}

/// HTTP response handed back to an adapter
#[derive(Debug, Clone)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if response indicates CAPTCHA
    pub fn is_captcha(&self) -> bool {
        self.text.contains("captcha")
            || self.text.contains("CAPTCHA")
            || self.text.contains("unusual traffic")
            || self.text.contains("automated requests")
    }

    /// Turn a non-2xx status into an error tagged with the provider name
    pub fn error_for_status(self, provider: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Http(format!(
                "{} returned status {}",
                provider, self.status
            )))
        }
    }

    /// Decode the body against a provider schema
    pub fn json<T: DeserializeOwned>(&self, provider: &str) -> Result<T> {
        serde_json::from_str(&self.text)
            .map_err(|e| Error::Parse(format!("{}: unexpected response shape: {}", provider, e)))
    }
}

/// Main adapter trait that every search provider implements
///
/// `search` returns results in the provider's order, never more than
/// `config.max_results`, and an empty list when the provider found nothing.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider this adapter talks to
    fn provider(&self) -> Provider;

    /// Provider name
    fn name(&self) -> &str {
        self.provider().as_str()
    }

    /// Run one query
    async fn search(&self, query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>>;
}
