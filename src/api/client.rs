//! Typed client for the backend API.
//!
//! Every operation funnels failures through one normalization rule: a non-2xx
//! response carrying the backend's `{ "error": ... }` body becomes
//! [`ApiError::Application`] with that string verbatim; everything else that
//! prevents a decoded response becomes [`ApiError::Transport`].

use crate::api::dto::{ClickStats, CreateRequest, HealthStatus, Page, ShortLink};
use crate::api::transport::{ApiRequest, HttpTransport, RawResponse};
use crate::error::ApiError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

/// Structured error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the URL-shortening backend.
///
/// Generic over [`HttpTransport`] so tests can substitute a fake; constructed
/// explicitly rather than held as module state.
pub struct ApiClient<T: HttpTransport> {
    transport: T,
    /// API base including the `/api` prefix, no trailing slash.
    base: String,
    /// Scheme + authority only, for endpoints served off the origin root.
    origin: String,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Creates a client against `base_url` (e.g. `http://localhost:8080/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(transport: T, base_url: &str) -> anyhow::Result<Self> {
        let base = base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base)?;
        let origin = parsed.origin().ascii_serialization();

        Ok(Self {
            transport,
            base,
            origin,
        })
    }

    /// Submits a URL for shortening.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Application`] when the backend rejects the request,
    ///   e.g. a taken custom code; the backend's message is kept verbatim.
    /// - [`ApiError::Transport`] when the request never completes.
    pub async fn create_short_link(&self, request: &CreateRequest) -> Result<ShortLink, ApiError> {
        let body = serde_json::to_value(request)
            .map_err(|e| ApiError::transport(format!("failed to encode request: {e}")))?;

        tracing::debug!(url = %request.url, "creating short link");
        let link: ShortLink = self
            .send_json(ApiRequest::post(format!("{}/shorten", self.base), body))
            .await?;

        tracing::info!(short_code = %link.short_code, "short link created");
        Ok(link)
    }

    /// Fetches one page of previously created short links.
    pub async fn list_short_links(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<ShortLink>, ApiError> {
        let url = format!("{}/urls?page={page}&limit={limit}", self.base);
        self.send_json(ApiRequest::get(url)).await
    }

    /// Fetches click statistics for a short code.
    pub async fn get_stats(&self, short_code: &str) -> Result<ClickStats, ApiError> {
        let url = format!("{}/stats/{short_code}", self.base);
        self.send_json(ApiRequest::get(url)).await
    }

    /// Fetches the QR code image (PNG bytes) for a short code.
    ///
    /// Callers treat failure as a rendering fallback: degrade to a
    /// placeholder, no notification.
    pub async fn fetch_qr_image(&self, short_code: &str) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/qr/{short_code}/image", self.base);
        let response = self.transport.execute(ApiRequest::get(url)).await?;

        if !response.is_success() {
            return Err(Self::rejection(&response));
        }

        Ok(response.body)
    }

    /// Address of the backend-rendered QR page for a short code.
    pub fn qr_page_url(&self, short_code: &str) -> String {
        format!("{}/qr/{short_code}", self.base)
    }

    /// Checks backend health. Served from the origin root, outside `/api`.
    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/health", self.origin);
        self.send_json(ApiRequest::get(url)).await
    }

    async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(Self::rejection(&response));
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::transport(format!("malformed response body: {e}")))
    }

    /// Normalizes a non-2xx response into an application error.
    fn rejection(response: &RawResponse) -> ApiError {
        match serde_json::from_slice::<ErrorBody>(&response.body) {
            Ok(body) => ApiError::application(response.status, body.error),
            Err(_) => ApiError::application(
                response.status,
                format!("request failed with status {}", response.status),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::{Method, MockHttpTransport};
    use serde_json::json;

    fn ok_response(body: serde_json::Value) -> RawResponse {
        RawResponse {
            status: 200,
            body: serde_json::to_vec(&body).unwrap(),
        }
    }

    fn client(transport: MockHttpTransport) -> ApiClient<MockHttpTransport> {
        ApiClient::new(transport, "http://localhost:8080/api").unwrap()
    }

    #[tokio::test]
    async fn list_builds_page_and_limit_query() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.method == Method::Get
                    && request.url == "http://localhost:8080/api/urls?page=3&limit=10"
            })
            .return_once(|_| {
                Ok(ok_response(json!({
                    "urls": [],
                    "total": 0,
                    "page": 3,
                    "limit": 10,
                    "total_pages": 0
                })))
            });

        let page = client(transport).list_short_links(3, 10).await.unwrap();
        assert_eq!(page.page, 3);
    }

    #[tokio::test]
    async fn health_check_hits_origin_root() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.url == "http://localhost:8080/health")
            .return_once(|_| {
                Ok(ok_response(json!({
                    "status": "ok",
                    "message": "healthy"
                })))
            });

        let health = client(transport).health_check().await.unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn error_body_surfaces_verbatim_as_application_error() {
        let mut transport = MockHttpTransport::new();
        transport.expect_execute().return_once(|_| {
            Ok(RawResponse {
                status: 409,
                body: serde_json::to_vec(&json!({ "error": "Custom code already exists" }))
                    .unwrap(),
            })
        });

        let err = client(transport).get_stats("taken").await.unwrap_err();
        assert!(matches!(err, ApiError::Application { status: 409, .. }));
        assert_eq!(err.message(), "Custom code already exists");
    }

    #[tokio::test]
    async fn unparseable_error_body_falls_back_to_status_message() {
        let mut transport = MockHttpTransport::new();
        transport.expect_execute().return_once(|_| {
            Ok(RawResponse {
                status: 502,
                body: b"<html>bad gateway</html>".to_vec(),
            })
        });

        let err = client(transport).get_stats("abc123").await.unwrap_err();
        assert_eq!(err.message(), "request failed with status 502");
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_transport_error() {
        let mut transport = MockHttpTransport::new();
        transport.expect_execute().return_once(|_| {
            Ok(RawResponse {
                status: 200,
                body: b"not json".to_vec(),
            })
        });

        let err = client(transport).get_stats("abc123").await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn qr_image_returns_raw_bytes() {
        let png = vec![0x89, b'P', b'N', b'G'];
        let body = png.clone();
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.url == "http://localhost:8080/api/qr/abc123/image")
            .return_once(move |_| Ok(RawResponse { status: 200, body }));

        let bytes = client(transport).fetch_qr_image("abc123").await.unwrap();
        assert_eq!(bytes, png);
    }

    #[test]
    fn qr_page_url_points_at_api_path() {
        let client = client(MockHttpTransport::new());
        assert_eq!(
            client.qr_page_url("abc123"),
            "http://localhost:8080/api/qr/abc123"
        );
    }
}
