//! Transport seam between the typed client and the wire.
//!
//! [`HttpTransport`] is the substitution point for tests: the client is
//! generic over it, and a fake or mock transport stands in for the network.
//! Only transport-level failures surface as errors here; an HTTP error status
//! is a successful exchange and comes back as a [`RawResponse`] for the
//! client to interpret.

use crate::error::ApiError;
use async_trait::async_trait;
use std::time::Duration;

/// HTTP method subset used by the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing request, fully resolved (absolute URL, query included).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body for POST requests.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests against the backend.
///
/// # Implementations
///
/// - [`ReqwestTransport`] - production HTTP transport
/// - Test mocks available with `cfg(test)`; integration tests use a canned
///   fake (see `tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and reads the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the request never completes:
    /// connection failure, timeout, or an unreadable body.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Production transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with a single fixed per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend fails to initialize.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::transport("request timed out")
            } else {
                ApiError::transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(format!("failed to read response body: {e}")))?
            .to_vec();

        Ok(RawResponse { status, body })
    }
}
