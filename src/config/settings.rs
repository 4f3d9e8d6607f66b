//! Settings structures for search-toolkit configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Main settings structure, usually read from `search-toolkit.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchConfig,
    pub outgoing: OutgoingSettings,
    pub diagram: DiagramSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("invalid settings file: {}", e)))
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        self.search.merge_env()
    }
}

/// Which search backend the facade dispatches to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Scraped DuckDuckGo HTML results, no key required
    #[default]
    DuckDuckGo,
    /// Google Custom Search JSON API
    Google,
    /// Bing Web Search API v7
    Bing,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "duckduckgo",
            Self::Google => "google",
            Self::Bing => "bing",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duckduckgo" | "ddg" => Ok(Self::DuckDuckGo),
            "google" => Ok(Self::Google),
            "bing" => Ok(Self::Bing),
            other => Err(Error::Config(format!("unknown provider: {}", other))),
        }
    }
}

/// Safe search level passed to providers that support it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    Off,
    #[default]
    Moderate,
    Strict,
}

impl SafeSearch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Moderate => "moderate",
            Self::Strict => "strict",
        }
    }
}

/// Search behaviour and provider credentials
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Active provider
    pub provider: Provider,
    /// Google Custom Search API key
    pub google_api_key: Option<String>,
    /// Google programmable search engine id (`cx`)
    pub google_search_engine_id: Option<String>,
    /// Bing Web Search subscription key
    pub bing_api_key: Option<String>,
    /// Region in DuckDuckGo form, e.g. `wt-wt`, `us-en`, `de-de`
    pub region: String,
    /// Safe search level
    pub safesearch: SafeSearch,
    /// Upper bound on the number of results returned per query
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            google_api_key: None,
            google_search_engine_id: None,
            bing_api_key: None,
            region: "wt-wt".to_string(),
            safesearch: SafeSearch::default(),
            max_results: 10,
        }
    }
}

// Keys are redacted so configs can be logged.
impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(v: &Option<String>) -> &'static str {
            if v.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }
        f.debug_struct("SearchConfig")
            .field("provider", &self.provider)
            .field("google_api_key", &redact(&self.google_api_key))
            .field("google_search_engine_id", &self.google_search_engine_id)
            .field("bing_api_key", &redact(&self.bing_api_key))
            .field("region", &self.region)
            .field("safesearch", &self.safesearch)
            .field("max_results", &self.max_results)
            .finish()
    }
}

impl SearchConfig {
    /// Create a config for a provider with default limits
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            ..Default::default()
        }
    }

    /// Build a config purely from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.merge_env()?;
        Ok(config)
    }

    /// Override fields from `WEB_SEARCH_*`, `GOOGLE_*` and `BING_*` variables
    pub fn merge_env(&mut self) -> Result<()> {
        if let Some(val) = env_value("WEB_SEARCH_PROVIDER") {
            self.provider = val.parse()?;
        }
        if let Some(val) = env_value("WEB_SEARCH_REGION") {
            self.region = val;
        }
        if let Some(val) = env_value("WEB_SEARCH_MAX_RESULTS") {
            self.max_results = val.parse().map_err(|_| {
                Error::Config(format!("WEB_SEARCH_MAX_RESULTS is not a number: {}", val))
            })?;
        }
        if let Some(val) = env_value("GOOGLE_API_KEY") {
            self.google_api_key = Some(val);
        }
        if let Some(val) = env_value("GOOGLE_SEARCH_ENGINE_ID") {
            self.google_search_engine_id = Some(val);
        }
        if let Some(val) = env_value("BING_API_KEY") {
            self.bing_api_key = Some(val);
        }
        Ok(())
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_google_credentials(
        mut self,
        api_key: impl Into<String>,
        search_engine_id: impl Into<String>,
    ) -> Self {
        self.google_api_key = Some(api_key.into());
        self.google_search_engine_id = Some(search_engine_id.into());
        self
    }

    pub fn with_bing_key(mut self, api_key: impl Into<String>) -> Self {
        self.bing_api_key = Some(api_key.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_safesearch(mut self, safesearch: SafeSearch) -> Self {
        self.safesearch = safesearch;
        self
    }

    /// Country part of the region (`us-en` -> `us`); `None` for worldwide
    pub fn region_country(&self) -> Option<&str> {
        let country = self.region.split('-').next()?;
        if country.is_empty() || country == "wt" {
            None
        } else {
            Some(country)
        }
    }

    /// Language part of the region (`us-en` -> `en`)
    pub fn region_language(&self) -> Option<&str> {
        let mut parts = self.region.split('-');
        let country = parts.next()?;
        if country == "wt" {
            return None;
        }
        parts.next().filter(|l| !l.is_empty())
    }
}

/// Treat empty variables the same as unset ones
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Fixed User-Agent (none = random browser UA)
    pub user_agent: Option<String>,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            verify_ssl: true,
            user_agent: None,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Defaults for the `draw` command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSettings {
    pub base_circle_count: usize,
    pub base_circle_color: String,
    pub top_circle_color: String,
    pub line_color: String,
    pub line_width: u32,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            base_circle_count: 4,
            base_circle_color: "blue".to_string(),
            top_circle_color: "orange".to_string(),
            line_color: "grey".to_string(),
            line_width: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.search.provider, Provider::DuckDuckGo);
        assert_eq!(settings.search.max_results, 10);
        assert_eq!(settings.search.region, "wt-wt");
        assert_eq!(settings.diagram.base_circle_count, 4);
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("google".parse::<Provider>().unwrap(), Provider::Google);
        assert_eq!(" Bing ".parse::<Provider>().unwrap(), Provider::Bing);
        assert_eq!("ddg".parse::<Provider>().unwrap(), Provider::DuckDuckGo);

        let err = "yahoo".parse::<Provider>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_settings_from_yaml() {
        let yaml = r#"
search:
  provider: bing
  bing_api_key: secret
  max_results: 3
diagram:
  line_width: 5
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.search.provider, Provider::Bing);
        assert_eq!(settings.search.bing_api_key.as_deref(), Some("secret"));
        assert_eq!(settings.search.max_results, 3);
        assert_eq!(settings.search.region, "wt-wt");
        assert_eq!(settings.diagram.line_width, 5);
        assert_eq!(settings.diagram.line_color, "grey");
    }

    #[test]
    fn test_unknown_provider_in_yaml() {
        let err = Settings::from_yaml("search:\n  provider: altavista\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_region_parts() {
        let config = SearchConfig::default().with_region("us-en");
        assert_eq!(config.region_country(), Some("us"));
        assert_eq!(config.region_language(), Some("en"));

        let worldwide = SearchConfig::default();
        assert_eq!(worldwide.region_country(), None);
        assert_eq!(worldwide.region_language(), None);
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = SearchConfig::new(Provider::Bing).with_bing_key("hunter2");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<set>"));
    }
}
