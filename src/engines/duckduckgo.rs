//! DuckDuckGo adapter (the scraped provider)
//!
//! The adapter itself only reshapes records; fetching them is delegated to a
//! [`TextSearch`] backend. [`DuckDuckGoHtml`] is the default backend and
//! scrapes the no-JavaScript HTML endpoint.

use super::traits::*;
use crate::config::{Provider, SafeSearch, SearchConfig};
use crate::error::{Error, Result};
use crate::network::HttpClient;
use crate::results::{limit_results, SearchResult};
use async_trait::async_trait;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const HTML_URL: &str = "https://html.duckduckgo.com/html/";

/// One raw record returned by a text search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextHit {
    pub title: String,
    pub href: String,
    pub body: String,
}

impl TextHit {
    pub fn new(title: impl Into<String>, href: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            body: body.into(),
        }
    }
}

impl From<TextHit> for SearchResult {
    fn from(hit: TextHit) -> Self {
        SearchResult {
            title: hit.title,
            url: hit.href,
            snippet: hit.body,
        }
    }
}

/// A keyword search library returning `{title, href, body}` records
#[async_trait]
pub trait TextSearch: Send + Sync {
    async fn text(
        &self,
        keywords: &str,
        region: &str,
        safesearch: SafeSearch,
        max_results: usize,
    ) -> Result<Vec<TextHit>>;
}

/// DuckDuckGo search adapter
#[derive(Clone)]
pub struct DuckDuckGo {
    backend: Arc<dyn TextSearch>,
}

impl DuckDuckGo {
    /// Adapter backed by the HTML scraper
    pub fn new(client: HttpClient) -> Self {
        Self::with_backend(Arc::new(DuckDuckGoHtml::new(client)))
    }

    /// Adapter backed by any text search implementation
    pub fn with_backend(backend: Arc<dyn TextSearch>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGo {
    fn provider(&self) -> Provider {
        Provider::DuckDuckGo
    }

    async fn search(&self, query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
        if config.max_results == 0 {
            return Ok(Vec::new());
        }

        let hits = self
            .backend
            .text(query, &config.region, config.safesearch, config.max_results)
            .await?;

        let results = hits.into_iter().map(SearchResult::from).collect();
        Ok(limit_results(results, config.max_results))
    }
}

/// Scraper for `html.duckduckgo.com`
pub struct DuckDuckGoHtml {
    client: HttpClient,
    html_url: String,
}

impl DuckDuckGoHtml {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            html_url: HTML_URL.to_string(),
        }
    }

    /// Point the scraper at another endpoint
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = url.into();
        self
    }

    /// Build the form POST for a query
    pub fn request(&self, keywords: &str, region: &str, safesearch: SafeSearch) -> EngineRequest {
        let kp = match safesearch {
            SafeSearch::Strict => "1",
            SafeSearch::Moderate => "-1",
            SafeSearch::Off => "-2",
        };

        let form_data = vec![
            ("q".to_string(), keywords.to_string()),
            ("b".to_string(), String::new()),
            ("kl".to_string(), region.to_string()),
            ("kp".to_string(), kp.to_string()),
        ];

        EngineRequest::post(&self.html_url).form(form_data)
    }

    /// Extract result records from a results page
    pub fn parse_html(&self, html: &str, max_results: usize) -> Result<Vec<TextHit>> {
        let document = Html::parse_document(html);

        let result_selector = selector("div.result")?;
        let title_selector = selector("a.result__a")?;
        let snippet_selector = selector(".result__snippet")?;

        let mut hits = Vec::new();

        for element in document.select(&result_selector) {
            if hits.len() >= max_results {
                break;
            }

            let title_elem = match element.select(&title_selector).next() {
                Some(t) => t,
                None => continue,
            };

            let title = collapse(title_elem.text());
            if title.is_empty() {
                continue;
            }

            let href = title_elem
                .value()
                .attr("href")
                .map(decode_redirect)
                .unwrap_or_default();

            // Skip ads and other DuckDuckGo internal links
            if href.is_empty() || href.contains("duckduckgo.com") {
                continue;
            }

            let body = element
                .select(&snippet_selector)
                .next()
                .map(|s| collapse(s.text()))
                .unwrap_or_default();

            hits.push(TextHit { title, href, body });
        }

        Ok(hits)
    }
}

#[async_trait]
impl TextSearch for DuckDuckGoHtml {
    async fn text(
        &self,
        keywords: &str,
        region: &str,
        safesearch: SafeSearch,
        max_results: usize,
    ) -> Result<Vec<TextHit>> {
        let request = self.request(keywords, region, safesearch);
        let response = self.client.execute(request).await?;
        let response = response.error_for_status("duckduckgo")?;

        let hits = self.parse_html(&response.text, max_results)?;

        // A challenge page has no results; result text may mention captchas
        if hits.is_empty() && response.is_captcha() {
            return Err(Error::Http("duckduckgo: CAPTCHA detected".to_string()));
        }

        debug!("duckduckgo returned {} records", hits.len());
        Ok(hits)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("invalid selector {}: {:?}", css, e)))
}

fn collapse<'a>(text: impl Iterator<Item = &'a str>) -> String {
    text.collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unwrap `//duckduckgo.com/l/?uddg=<target>` redirect links
fn decode_redirect(href: &str) -> String {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    if let Ok(parsed) = url::Url::parse(&absolute) {
        if parsed.host_str().is_some_and(|h| h.ends_with("duckduckgo.com"))
            && parsed.path() == "/l/"
        {
            if let Some((_, target)) = parsed.query_pairs().find(|(k, _)| k == "uddg") {
                return target.into_owned();
            }
        }
    }

    absolute
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r##"
        <html><body>
          <div class="result results_links">
            <h2><a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rust-lang.org%2F&amp;rut=abc">
              Rust Programming   Language</a></h2>
            <a class="result__snippet" href="#">A language empowering everyone.</a>
          </div>
          <div class="result result--ad">
            <h2><a class="result__a" href="https://duckduckgo.com/y.js?ad=1">Sponsored</a></h2>
          </div>
          <div class="result">
            <h2><a class="result__a" href="https://doc.rust-lang.org/book/">The Book</a></h2>
          </div>
        </body></html>
    "##;

    struct FixedBackend(Vec<TextHit>);

    #[async_trait]
    impl TextSearch for FixedBackend {
        async fn text(
            &self,
            _keywords: &str,
            _region: &str,
            _safesearch: SafeSearch,
            _max_results: usize,
        ) -> Result<Vec<TextHit>> {
            Ok(self.0.clone())
        }
    }

    fn scraper() -> DuckDuckGoHtml {
        DuckDuckGoHtml::new(HttpClient::new().unwrap())
    }

    #[test]
    fn test_duckduckgo_request() {
        let request = scraper().request("rust programming", "us-en", SafeSearch::Strict);

        assert!(request.url.contains("duckduckgo.com"));
        assert_eq!(request.method, HttpMethod::Post);
        match request.data {
            Some(RequestBody::Form(ref form)) => {
                assert!(form.contains(&("q".to_string(), "rust programming".to_string())));
                assert!(form.contains(&("kl".to_string(), "us-en".to_string())));
                assert!(form.contains(&("kp".to_string(), "1".to_string())));
            }
            None => panic!("expected a form body"),
        }
    }

    #[test]
    fn test_parse_html() {
        let hits = scraper().parse_html(RESULTS_PAGE, 10).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Rust Programming Language");
        assert_eq!(hits[0].href, "https://www.rust-lang.org/");
        assert_eq!(hits[0].body, "A language empowering everyone.");
        assert_eq!(hits[1].href, "https://doc.rust-lang.org/book/");
        assert_eq!(hits[1].body, "");
    }

    #[test]
    fn test_parse_html_respects_limit() {
        let hits = scraper().parse_html(RESULTS_PAGE, 1).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_parse_html_without_results() {
        let page = r#"<html><body><div class="no-results">No results.</div></body></html>"#;
        assert!(scraper().parse_html(page, 10).unwrap().is_empty());
        assert!(scraper().parse_html("", 10).unwrap().is_empty());
    }

    #[test]
    fn test_decode_redirect_passthrough() {
        assert_eq!(decode_redirect("https://example.com/a"), "https://example.com/a");
    }

    #[tokio::test]
    async fn test_maps_fields_in_order() {
        let adapter = DuckDuckGo::with_backend(Arc::new(FixedBackend(vec![
            TextHit::new("Test Title 1", "http://example.com/1", "Test Snippet 1"),
            TextHit::new("Test Title 2", "http://example.com/2", "Test Snippet 2"),
        ])));

        let results = adapter
            .search("test query", &SearchConfig::default())
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].as_tuple(),
            ("Test Title 1", "http://example.com/1", "Test Snippet 1")
        );
        assert_eq!(results[1].url, "http://example.com/2");
    }

    #[tokio::test]
    async fn test_truncates_oversized_backend_output() {
        let hits = (0..5)
            .map(|i| TextHit::new(format!("t{}", i), format!("http://e/{}", i), ""))
            .collect();
        let adapter = DuckDuckGo::with_backend(Arc::new(FixedBackend(hits)));
        let config = SearchConfig::default().with_max_results(3);

        let results = adapter.search("q", &config).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].title, "t2");
    }
}
