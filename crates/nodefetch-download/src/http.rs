//! HTTP backend abstraction for streaming downloads.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with redirects followed and a connect timeout.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use url::Url;

use nodefetch_core::{FetchError, FetchResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// A streaming response body.
pub struct HttpResponseBody {
    /// Total size declared by the `content-length` header, if present.
    pub content_length: Option<u64>,
    /// The body as an ordered sequence of byte chunks.
    pub stream: BoxStream<'static, FetchResult<Bytes>>,
}

impl std::fmt::Debug for HttpResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponseBody")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Trait for HTTP backends that issue streaming GET requests.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test the download pipeline without a network.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Issue a GET request, following redirects, and return the body as a
    /// chunk stream. When `bearer` is `Some`, an `Authorization: Bearer`
    /// header is attached; the caller decides whether the origin may see
    /// the token.
    ///
    /// A non-success HTTP status is an error, not a body.
    async fn get_stream(
        &self,
        url: &Url,
        bearer: Option<&str>,
    ) -> FetchResult<HttpResponseBody>;
}

// ============================================================================
// Backend Configuration
// ============================================================================

/// Configuration for the reqwest backend.
///
/// Use the builder pattern methods to customize the configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// User agent string for HTTP requests.
    pub(crate) user_agent: String,
    /// Connection timeout. There is deliberately no total request timeout:
    /// download bodies are unbounded and must not be killed mid-stream.
    pub(crate) connect_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("nodefetch/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl BackendConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connection timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Redirects are followed (reqwest's default policy), and reqwest strips
/// sensitive headers such as `Authorization` when a redirect crosses hosts.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self::new(&BackendConfig::default())
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_stream(
        &self,
        url: &Url,
        bearer: Option<&str>,
    ) -> FetchResult<HttpResponseBody> {
        let mut request = self.client.get(url.as_str());
        if let Some(token) = bearer {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::network(url.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::network_with_status(
                url.as_str(),
                format!("HTTP {status}"),
                status.as_u16(),
            ));
        }

        let content_length = response.content_length();
        let for_errors = url.to_string();
        let stream = response
            .bytes_stream()
            .map(move |chunk| {
                chunk.map_err(|e| FetchError::network(for_errors.as_str(), e.to_string()))
            })
            .boxed();

        Ok(HttpResponseBody {
            content_length,
            stream,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use futures_util::StreamExt;

    use super::testing::FakeBackend;
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackendConfig::new();
        assert!(config.user_agent.starts_with("nodefetch/"));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = BackendConfig::new()
            .with_user_agent("test-agent")
            .with_connect_timeout(Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let _ = ReqwestBackend::new(&BackendConfig::new());
    }

    #[tokio::test]
    async fn test_fake_backend_serves_chunks_in_order() {
        let backend = FakeBackend::new().with_body_chunks(&[b"ab", b"c", b"defg"]);
        let url = Url::parse("https://example.com/a.bin").unwrap();

        let body = backend.get_stream(&url, None).await.unwrap();
        assert_eq!(body.content_length, Some(7));

        let chunks: Vec<_> = body.stream.collect().await;
        let bytes: Vec<u8> = chunks
            .into_iter()
            .flat_map(|c| c.unwrap().to_vec())
            .collect();
        assert_eq!(bytes, b"abcdefg");
    }

    #[tokio::test]
    async fn test_fake_backend_records_bearer() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://huggingface.co/a/b").unwrap();

        backend.get_stream(&url, Some("tok")).await.unwrap();
        backend.get_stream(&url, None).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].bearer.as_deref(), Some("tok"));
        assert_eq!(requests[1].bearer, None);
    }

    #[tokio::test]
    async fn test_fake_backend_non_success_status() {
        let backend = FakeBackend::new().with_status(404);
        let url = Url::parse("https://example.com/missing").unwrap();

        let err = backend.get_stream(&url, None).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Network {
                status_code: Some(404),
                ..
            }
        ));
    }
}
