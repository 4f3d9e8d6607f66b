//! HTTP client for talking to search providers and fetching pages

use super::user_agent::{accept_html, accept_language, generate_user_agent};
use crate::config::OutgoingSettings;
use crate::engines::{EngineRequest, EngineResponse, HttpMethod, RequestBody};
use crate::error::{Error, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with browser-like defaults
///
/// Every call is a single request: no retries, no redirects are inspected,
/// and no cookies are kept between calls.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout)
            .ok()
            .filter(|t| !t.is_zero())
            .ok_or_else(|| {
                Error::Config(format!(
                    "outgoing.request_timeout must be a positive number of seconds, got {}",
                    settings.request_timeout
                ))
            })?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: settings
                .user_agent
                .clone()
                .unwrap_or_else(generate_user_agent),
        })
    }

    /// Execute an engine request
    ///
    /// Any status code is returned as a response; only transport failures
    /// are errors here. Callers decide what a non-2xx status means.
    pub async fn execute(&self, request: EngineRequest) -> Result<EngineResponse> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        req_builder = req_builder
            .header("User-Agent", &self.user_agent)
            .header("Accept-Language", accept_language(&request.lang));

        if !request.has_header("Accept") {
            req_builder = req_builder.header("Accept", accept_html());
        }

        // Add custom headers
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        // Add query parameters
        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        // Add body
        if let Some(body) = request.data {
            req_builder = match body {
                RequestBody::Form(data) => req_builder.form(&data),
            };
        }

        debug!("{:?} {}", request.method, request.url);

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Simple GET request
    pub async fn get(&self, url: &str) -> Result<EngineResponse> {
        self.execute(EngineRequest::get(url)).await
    }

    /// Parse response into EngineResponse
    async fn parse_response(response: Response) -> Result<EngineResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(EngineResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
