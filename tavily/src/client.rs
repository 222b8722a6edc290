//! The Tavily client: configuration, authentication, and the request executor.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cancellation::CancelToken;
use crate::crawl::{CrawlOptions, CrawlResponse};
use crate::errors::{ApiError, TavilyError};
use crate::extract::{ExtractOptions, ExtractResponse};
use crate::map::{MapOptions, MapResponse};
use crate::search::{SearchOptions, SearchResponse};

/// Default base URL for the Tavily API.
pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Default network timeout applied when the client owns its transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Value of the `X-Client-Source` header sent with every request.
pub const CLIENT_SOURCE: &str = "tavily-rust";

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "TAVILY_API_KEY";

/// Configuration for constructing a [`TavilyClient`].
///
/// All fields are optional; the defaults match the hosted API.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Base URL override. Trailing slashes are stripped.
    pub base_url: Option<String>,
    /// Network timeout for the client-owned transport. Ignored when an
    /// injected transport is supplied.
    pub timeout: Option<Duration>,
    /// Injected HTTP transport. The client does not manage its pool.
    pub http_client: Option<reqwest::Client>,
    /// Extra headers sent with every request, applied after the fixed set.
    pub headers: HashMap<String, String>,
}

impl ClientOptions {
    /// Creates empty client options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the network timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Injects an HTTP transport.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Asynchronous client for the Tavily API.
///
/// The client is immutable after construction and holds no per-call
/// state, so a single instance can be shared across tasks issuing calls
/// in parallel. Each operation performs exactly one HTTP exchange; retry
/// policy is left to the caller.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
    headers: HeaderMap,
}

impl TavilyClient {
    /// Creates a new client.
    ///
    /// An empty `api_key` falls back to the `TAVILY_API_KEY` environment
    /// variable. A key that is still empty is permitted here and rejected
    /// with an unauthorized error at call time.
    ///
    /// # Errors
    ///
    /// Returns [`TavilyError::Transport`] if the client-owned transport
    /// cannot be constructed.
    pub fn new(api_key: impl Into<String>, options: ClientOptions) -> Result<Self, TavilyError> {
        let api_key = resolve_api_key(&api_key.into(), |name| std::env::var(name).ok());

        let base_url = options
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let http = match options.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(options.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()?,
        };

        let headers = build_headers(&api_key, &options.headers);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http,
            headers,
        })
    }

    /// Returns the base URL calls are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a web search.
    ///
    /// An empty query is permitted and rejected server-side.
    ///
    /// # Errors
    ///
    /// Returns a [`TavilyError`] on classified API rejection, transport
    /// failure, cancellation, or a malformed response body.
    pub async fn search(
        &self,
        cancel: &CancelToken,
        query: impl Into<String>,
        options: Option<SearchOptions>,
    ) -> Result<SearchResponse, TavilyError> {
        let request = options.unwrap_or_default().into_request(query);
        self.execute(cancel, "/search", &request).await
    }

    /// Extracts content from one or more URLs.
    ///
    /// # Errors
    ///
    /// Fails fast with a bad-request [`ApiError`] when `urls` is empty;
    /// otherwise as [`TavilyClient::search`].
    pub async fn extract(
        &self,
        cancel: &CancelToken,
        urls: Vec<String>,
        options: Option<ExtractOptions>,
    ) -> Result<ExtractResponse, TavilyError> {
        if urls.is_empty() {
            return Err(ApiError::new(400, "at least one URL is required").into());
        }

        let request = options.unwrap_or_default().into_request(urls);
        self.execute(cancel, "/extract", &request).await
    }

    /// Crawls a website, extracting content from the discovered pages.
    ///
    /// # Errors
    ///
    /// Fails fast with a bad-request [`ApiError`] when `url` is empty;
    /// otherwise as [`TavilyClient::search`].
    pub async fn crawl(
        &self,
        cancel: &CancelToken,
        url: impl Into<String>,
        options: Option<CrawlOptions>,
    ) -> Result<CrawlResponse, TavilyError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ApiError::new(400, "URL is required").into());
        }

        let request = options.unwrap_or_default().into_request(url);
        self.execute(cancel, "/crawl", &request).await
    }

    /// Discovers and maps a website's URL structure without extracting
    /// full content.
    ///
    /// # Errors
    ///
    /// Fails fast with a bad-request [`ApiError`] when `url` is empty;
    /// otherwise as [`TavilyClient::search`].
    pub async fn map(
        &self,
        cancel: &CancelToken,
        url: impl Into<String>,
        options: Option<MapOptions>,
    ) -> Result<MapResponse, TavilyError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ApiError::new(400, "URL is required").into());
        }

        let request = options.unwrap_or_default().into_request(url);
        self.execute(cancel, "/map", &request).await
    }

    /// Performs one authenticated exchange against `endpoint`.
    ///
    /// Credential and cancellation preconditions are checked before any
    /// network I/O; the in-flight exchange is raced against the cancel
    /// token so a mid-call cancel aborts promptly and drops the
    /// connection.
    async fn execute<Req, Resp>(
        &self,
        cancel: &CancelToken,
        endpoint: &str,
        request: &Req,
    ) -> Result<Resp, TavilyError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        if self.api_key.is_empty() {
            return Err(ApiError::missing_api_key().into());
        }
        if cancel.is_cancelled() {
            return Err(cancelled_error(cancel));
        }

        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, "dispatching request");

        let send = self
            .http
            .post(&url)
            .headers(self.headers.clone())
            .json(request)
            .send();
        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(cancelled_error(cancel)),
            result = send => result?,
        };

        let status = response.status().as_u16();
        let read = response.bytes();
        let body = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(cancelled_error(cancel)),
            result = read => result?,
        };

        if status != 200 {
            let error = parse_api_error(status, &body);
            warn!(endpoint, status, message = %error.message, "API call failed");
            return Err(error.into());
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Resolves the credential from an explicit value and an environment
/// lookup, explicit value winning.
fn resolve_api_key(explicit: &str, env: impl Fn(&str) -> Option<String>) -> String {
    if explicit.is_empty() {
        env(API_KEY_ENV).unwrap_or_default()
    } else {
        explicit.to_string()
    }
}

/// Builds the fixed header map sent with every request.
///
/// Caller overrides that fail header validation are skipped with a
/// warning rather than failing construction.
fn build_headers(api_key: &str, extra: &HashMap<String, String>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static("x-client-source"),
        HeaderValue::from_static(CLIENT_SOURCE),
    );
    if let Ok(mut value) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    for (name, value) in extra {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!(header = %name, "skipping invalid header override"),
        }
    }

    headers
}

/// Error body shape used by the API for non-success responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: ErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    error: String,
}

/// Classifies a non-success response into an [`ApiError`].
///
/// The nested `detail.error` message is used when present; otherwise a
/// generic fallback, never an empty message. The literal status code is
/// always carried.
fn parse_api_error(status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.detail.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| "unknown error".to_string());

    ApiError::new(status, message)
}

fn cancelled_error(cancel: &CancelToken) -> TavilyError {
    TavilyError::Cancelled {
        reason: cancel.reason().unwrap_or_else(|| "cancelled".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Port 9 (discard) never serves HTTP; reaching the network would
    // surface as a transport error, which these tests treat as failure.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    #[test]
    fn test_resolve_api_key_explicit_wins() {
        let key = resolve_api_key("tvly-explicit", |_| Some("tvly-env".to_string()));
        assert_eq!(key, "tvly-explicit");
    }

    #[test]
    fn test_resolve_api_key_falls_back_to_env() {
        let key = resolve_api_key("", |name| {
            assert_eq!(name, API_KEY_ENV);
            Some("tvly-env".to_string())
        });
        assert_eq!(key, "tvly-env");
    }

    #[test]
    fn test_resolve_api_key_empty_when_unset() {
        let key = resolve_api_key("", |_| None);
        assert_eq!(key, "");
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = TavilyClient::new(
            "tvly-test-key",
            ClientOptions::new().with_base_url("https://custom.api.com/"),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://custom.api.com");
    }

    #[test]
    fn test_default_base_url() {
        let client = TavilyClient::new("tvly-test-key", ClientOptions::new()).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_fixed_headers() {
        let client = TavilyClient::new("tvly-test-key", ClientOptions::new()).unwrap();

        assert_eq!(client.headers[CONTENT_TYPE], "application/json");
        assert_eq!(client.headers["x-client-source"], CLIENT_SOURCE);
        assert_eq!(client.headers[AUTHORIZATION], "Bearer tvly-test-key");
    }

    #[test]
    fn test_header_overrides_applied() {
        let client = TavilyClient::new(
            "tvly-test-key",
            ClientOptions::new().with_header("x-trace-id", "abc123"),
        )
        .unwrap();
        assert_eq!(client.headers["x-trace-id"], "abc123");
    }

    #[test]
    fn test_invalid_header_override_skipped() {
        let client = TavilyClient::new(
            "tvly-test-key",
            ClientOptions::new().with_header("bad name", "value"),
        )
        .unwrap();
        assert!(!client.headers.contains_key("bad name"));
    }

    #[test]
    fn test_parse_api_error_extracts_detail() {
        let body = br#"{"detail": {"error": "Invalid API key provided"}}"#;
        let error = parse_api_error(401, body);

        assert_eq!(error.status, 401);
        assert_eq!(error.message, "Invalid API key provided");
    }

    #[test]
    fn test_parse_api_error_fallback_on_unparseable_body() {
        let error = parse_api_error(502, b"<html>Bad Gateway</html>");
        assert_eq!(error.status, 502);
        assert_eq!(error.message, "unknown error");
    }

    #[test]
    fn test_parse_api_error_fallback_on_empty_detail() {
        let error = parse_api_error(429, br#"{"detail": {}}"#);
        assert_eq!(error.message, "unknown error");
    }

    fn keyless_client() -> TavilyClient {
        let mut client =
            TavilyClient::new("tvly-test-key", ClientOptions::new().with_base_url(UNREACHABLE))
                .unwrap();
        client.api_key = String::new();
        client
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = keyless_client();
        let cancel = CancelToken::new();

        let error = client.search(&cancel, "test", None).await.unwrap_err();
        let api = error.as_api_error().expect("expected classified error");
        assert!(api.is_unauthorized());
    }

    #[tokio::test]
    async fn test_empty_urls_fail_before_network() {
        let client =
            TavilyClient::new("tvly-test-key", ClientOptions::new().with_base_url(UNREACHABLE))
                .unwrap();
        let cancel = CancelToken::new();

        let error = client.extract(&cancel, Vec::new(), None).await.unwrap_err();
        let api = error.as_api_error().expect("expected classified error");
        assert!(api.is_bad_request());
    }

    #[tokio::test]
    async fn test_empty_url_fails_before_network() {
        let client =
            TavilyClient::new("tvly-test-key", ClientOptions::new().with_base_url(UNREACHABLE))
                .unwrap();
        let cancel = CancelToken::new();

        let error = client.crawl(&cancel, "", None).await.unwrap_err();
        assert!(error.as_api_error().unwrap().is_bad_request());

        let error = client.map(&cancel, "", None).await.unwrap_err();
        assert!(error.as_api_error().unwrap().is_bad_request());
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_fails_before_network() {
        let client =
            TavilyClient::new("tvly-test-key", ClientOptions::new().with_base_url(UNREACHABLE))
                .unwrap();
        let cancel = CancelToken::new();
        cancel.cancel("caller gave up");

        let error = client.search(&cancel, "test", None).await.unwrap_err();
        assert!(error.is_transport());
        assert!(matches!(
            error,
            TavilyError::Cancelled { ref reason } if reason == "caller gave up"
        ));
    }
}
