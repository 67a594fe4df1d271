/*
[INPUT]:  Optional client configuration (base URL, timeout) and the environment
[OUTPUT]: Configured reqwest client issuing GET requests with normalized errors
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::env;
use crate::http::error::{Failure, Result, SafeQueryError};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL used when neither the config nor `API_URL` provides one
pub const DEFAULT_BASE_URL: &str = "https://agent-mint-api";

/// Request timeout used when the config does not set one
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Caller-facing client configuration
///
/// Every field is optional. An empty `base_url` or a zero `timeout_ms` counts
/// as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Config {
    /// Empty config: every value falls back to the environment or a default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL, taking precedence over `API_URL`
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout in milliseconds; zero keeps the default
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Config value, then the environment, then [`DEFAULT_BASE_URL`]
fn resolve_base_url(
    configured: Option<&str>,
    from_env: impl FnOnce() -> Option<String>,
) -> String {
    match configured.filter(|url| !url.is_empty()) {
        Some(url) => url.to_string(),
        None => from_env()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    }
}

fn resolve_timeout(configured: Option<u64>) -> Duration {
    let millis = configured
        .filter(|millis| *millis > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS);
    Duration::from_millis(millis)
}

fn normalize(failure: Failure) -> SafeQueryError {
    let kind = failure.kind();
    let err = SafeQueryError::from_failure(failure);
    tracing::debug!(
        kind,
        status = ?err.status(),
        message = err.message(),
        "request failed"
    );
    err
}

/// HTTP client for the SafeQuery API
///
/// Immutable once built; clone it or share it by reference across tasks.
#[derive(Debug, Clone)]
pub struct SafeQueryClient {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
}

impl SafeQueryClient {
    /// Create a client, resolving anything `config` leaves unset
    pub fn new(config: Option<&Config>) -> Result<Self> {
        let base_url = resolve_base_url(
            config.and_then(|config| config.base_url.as_deref()),
            env::api_url,
        );
        let timeout = resolve_timeout(config.and_then(|config| config.timeout_ms));
        Self::build(&base_url, timeout).map_err(normalize)
    }

    /// Create a client from `API_URL` and defaults
    pub fn from_env() -> Result<Self> {
        Self::new(None)
    }

    fn build(base_url: &str, timeout: Duration) -> std::result::Result<Self, Failure> {
        let base_url = Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            timeout,
        })
    }

    /// Resolved base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolved per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Append a fixed endpoint path to the base URL, keeping any base path prefix
    fn endpoint_url(&self, endpoint: &str) -> std::result::Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{endpoint}"))
    }

    /// Issue one GET to `endpoint` with `params` as the query string
    ///
    /// The body of a 2xx response is deserialized into `T` without further
    /// checks; ask for `serde_json::Value` to get it untouched. Any failure comes
    /// back as a [`SafeQueryError`].
    pub async fn get<T, Q>(&self, endpoint: &str, params: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.try_get(endpoint, params).await.map_err(normalize)
    }

    async fn try_get<T, Q>(&self, endpoint: &str, params: &Q) -> std::result::Result<T, Failure>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(endpoint, url = %url, "sending GET request");

        let response = self.http_client.get(url).query(params).send().await?;
        let status = response.status();
        tracing::debug!(endpoint, status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Failure::Response { status, body });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
