//! HTTP client for the OMDb catalog
//!
//! This module provides a thin client that encodes catalog query strings
//! and performs a single GET per request. Retrying is left to the caller.

use std::time::Duration;

use crate::error::{OmdbError, Result};
use crate::types::SearchRequest;

/// Public OMDb endpoint
pub const OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

/// User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("omdb-browser/", env!("CARGO_PKG_VERSION"));

/// Configuration for the OMDb HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// OMDb API key (required)
    pub api_key: String,
    /// Catalog endpoint (default: https://www.omdbapi.com/)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: OMDB_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the public endpoint with the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Build a configuration from `OMDB_API_KEY`, `OMDB_BASE_URL` and
    /// `OMDB_TIMEOUT_SECS`, falling back to defaults for unset values.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("OMDB_API_KEY") {
            config.api_key = v;
        }
        if let Some(v) = lookup("OMDB_BASE_URL") {
            config.base_url = v;
        }
        if let Some(v) = lookup("OMDB_TIMEOUT_SECS") {
            match v.trim().parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => tracing::warn!(value = %v, "ignoring invalid OMDB_TIMEOUT_SECS"),
            }
        }

        config
    }
}

/// HTTP client for the OMDb catalog
///
/// One GET per call, bounded by the configured timeout. A timeout surfaces
/// as `OmdbError::HttpError` like any other transport failure.
pub struct OmdbClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Endpoint without query string
    base_url: String,
    /// API key appended to every request
    api_key: String,
}

impl OmdbClient {
    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `OmdbError::MissingApiKey` if the key is blank
    /// - `OmdbError::InvalidUrl` if the base URL is not http(s)
    /// - `OmdbError::HttpError` if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let api_key = config.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(OmdbError::MissingApiKey);
        }

        let base_url = config.base_url.trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(OmdbError::InvalidUrl(base_url));
        }

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// URL for a search-mode request.
    ///
    /// `<base>?apikey=<key>&page=<n>[&type=<t>]&s=<term>`, with `type`
    /// omitted for `ContentType::All`.
    pub fn search_url(&self, request: &SearchRequest) -> String {
        let mut url = format!(
            "{}?apikey={}&page={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            request.page.max(1)
        );
        if let Some(kind) = request.content_type.query_value() {
            url.push_str("&type=");
            url.push_str(kind);
        }
        url.push_str("&s=");
        url.push_str(&urlencoding::encode(&request.term));
        url
    }

    /// URL for a detail-mode request with the full plot.
    pub fn detail_url(&self, imdb_id: &str) -> String {
        format!(
            "{}?apikey={}&i={}&plot=full",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(imdb_id)
        )
    }

    /// Fetch a catalog URL and return the body
    ///
    /// # Errors
    /// - `OmdbError::Unauthorized` - Server returned 401
    /// - `OmdbError::HttpError` - Network error, timeout or other non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(OmdbError::Unauthorized);
        }

        match response.error_for_status() {
            Err(err) => Err(OmdbError::HttpError(err)),
            Ok(_) => Err(OmdbError::ParseError(format!(
                "unexpected HTTP status {}",
                status
            ))),
        }
    }
}
