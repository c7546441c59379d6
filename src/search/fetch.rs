//! JSON GET requests with content-type validation.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::cookie::Jar;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Number of body characters kept in a [`FetchError::ProtocolMismatch`].
const SNIPPET_CHARS: usize = 80;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than JSON, typically an HTML
    /// error or login page.
    #[error("Expected JSON, got: {content_type}. First chars: {snippet}")]
    ProtocolMismatch {
        content_type: String,
        snippet: String,
    },

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("Invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport(error.to_string())
    }
}

/// Response as seen by [`JsonFetcher`], before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_owned),
            body: body.into(),
        }
    }

    /// `200 OK` with a JSON body.
    pub fn json(body: impl Into<String>) -> Self {
        Self::new(200, Some(JSON_MEDIA_TYPE), body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network seam used by [`JsonFetcher`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs a same-origin GET of `url` sending the given `Accept` header.
    ///
    /// Any HTTP status is a successful transport outcome; only failures to
    /// obtain a response are errors.
    async fn get(&self, url: &str, accept: &str) -> Result<RawResponse, FetchError>;
}

/// Validates a response and decodes its JSON body.
///
/// The content type is checked before the status, so a non-JSON error page is
/// reported as [`FetchError::ProtocolMismatch`] whatever its status.
pub fn decode_response<D: DeserializeOwned>(response: RawResponse) -> Result<D, FetchError> {
    let success = response.is_success();
    let content_type = response.content_type.unwrap_or_default();

    if !content_type.contains(JSON_MEDIA_TYPE) {
        return Err(FetchError::ProtocolMismatch {
            content_type,
            snippet: response.body.chars().take(SNIPPET_CHARS).collect(),
        });
    }

    if !success {
        return Err(FetchError::HttpStatus(response.status));
    }

    Ok(serde_json::from_str(&response.body)?)
}

/// Fetches and decodes JSON documents through an [`HttpTransport`].
#[derive(Clone)]
pub struct JsonFetcher {
    transport: Arc<dyn HttpTransport>,
}

impl JsonFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn fetch_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, FetchError> {
        let response = self.transport.get(url, JSON_MEDIA_TYPE).await?;
        decode_response(response)
    }
}

/// [`HttpTransport`] over `reqwest`, bound to a single origin.
///
/// Relative URLs are resolved against the base URL and requests to any other
/// origin are refused. Cookies set by that origin are kept and sent back, which
/// carries the session.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
    cookies: Arc<Jar>,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::Transport(format!("invalid base url {base_url}: {e}")))?;
        let cookies = Arc::new(Jar::default());

        let client = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .build()?;

        Ok(Self {
            client,
            base_url,
            cookies,
        })
    }

    /// Stores a `name=value` cookie for the bound origin.
    pub fn add_cookie(&self, cookie: &str) {
        self.cookies.add_cookie_str(cookie, &self.base_url);
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        let resolved = self
            .base_url
            .join(url)
            .map_err(|e| FetchError::Transport(format!("invalid url {url}: {e}")))?;

        if resolved.origin() != self.base_url.origin() {
            return Err(FetchError::Transport(format!(
                "refusing cross-origin request to {resolved}"
            )));
        }

        Ok(resolved)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, accept: &str) -> Result<RawResponse, FetchError> {
        let url = self.resolve(url)?;
        log::debug!("GET {url}");

        let response = self.client.get(url).header(ACCEPT, accept).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::dto::api::{ClientRecord, SearchResult};

    struct StaticTransport(RawResponse);

    #[async_trait]
    impl HttpTransport for StaticTransport {
        async fn get(&self, _url: &str, accept: &str) -> Result<RawResponse, FetchError> {
            assert_eq!(accept, JSON_MEDIA_TYPE);
            Ok(self.0.clone())
        }
    }

    fn fetcher(response: RawResponse) -> JsonFetcher {
        JsonFetcher::new(Arc::new(StaticTransport(response)))
    }

    #[tokio::test]
    async fn html_ok_response_is_protocol_mismatch() {
        let body = format!("<!doctype html><html>{}</html>", "x".repeat(200));
        let result = fetcher(RawResponse::new(200, Some("text/html; charset=utf-8"), body))
            .fetch_json::<Value>("/api/clients?q=")
            .await;

        match result {
            Err(FetchError::ProtocolMismatch {
                content_type,
                snippet,
            }) => {
                assert_eq!(content_type, "text/html; charset=utf-8");
                assert_eq!(snippet.chars().count(), 80);
                assert!(snippet.starts_with("<!doctype html>"));
            }
            other => panic!("expected protocol mismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn html_error_page_is_protocol_mismatch_not_status() {
        let result = fetcher(RawResponse::new(500, Some("text/html"), "<h1>boom</h1>"))
            .fetch_json::<Value>("/api/clients?q=")
            .await;

        assert!(matches!(result, Err(FetchError::ProtocolMismatch { .. })));
    }

    #[tokio::test]
    async fn json_server_error_is_http_status() {
        let result = fetcher(RawResponse::new(
            500,
            Some("application/json"),
            r#"{"error":"db"}"#,
        ))
        .fetch_json::<Value>("/api/clients?q=")
        .await;

        assert!(matches!(result, Err(FetchError::HttpStatus(500))));
    }

    #[tokio::test]
    async fn missing_content_type_is_protocol_mismatch() {
        let result = fetcher(RawResponse::new(200, None, "{}"))
            .fetch_json::<Value>("/api/clients?q=")
            .await;

        assert!(matches!(
            result,
            Err(FetchError::ProtocolMismatch { ref content_type, .. }) if content_type.is_empty()
        ));
    }

    #[tokio::test]
    async fn malformed_json_is_decode_error() {
        let result = fetcher(RawResponse::json("{\"results\": ["))
            .fetch_json::<Value>("/api/clients?q=")
            .await;

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn json_with_charset_decodes() {
        let value: Value = fetcher(RawResponse::new(
            200,
            Some("application/json; charset=utf-8"),
            r#"{"results": []}"#,
        ))
        .fetch_json("/api/projects?q=")
        .await
        .unwrap();

        assert_eq!(value["results"], Value::Array(vec![]));
    }

    #[test]
    fn null_results_decode_as_empty_list() {
        let decoded: SearchResult<ClientRecord> =
            decode_response(RawResponse::json(r#"{"results": null}"#)).unwrap();
        assert!(decoded.results.is_empty());
    }

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let body = "é".repeat(100);
        let err = decode_response::<Value>(RawResponse::new(200, Some("text/plain"), body))
            .unwrap_err();
        match err {
            FetchError::ProtocolMismatch { snippet, .. } => assert_eq!(snippet.chars().count(), 80),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn transport_resolves_relative_urls_on_its_origin() {
        let transport = ReqwestTransport::new("http://localhost:8080").unwrap();
        let url = transport.resolve("/api/clients?q=ac").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/clients?q=ac");
    }

    #[test]
    fn transport_refuses_other_origins() {
        let transport = ReqwestTransport::new("http://localhost:8080").unwrap();
        let result = transport.resolve("https://example.com/api/clients");
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
