#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use shorter_client::api::transport::{ApiRequest, HttpTransport, RawResponse};
use shorter_client::api::ApiClient;
use shorter_client::error::ApiError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://localhost:8080/api";

/// Canned-response transport; clones share the same queue and request log,
/// so tests keep a handle for inspection after moving a clone into the client.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    responses: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response with the given status.
    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse {
                status,
                body: serde_json::to_vec(&body).unwrap(),
            }));
    }

    /// Queues a transport-level failure.
    pub fn push_transport_error(&self, message: &str) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::transport(message)));
    }

    /// Requests the client has issued so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.inner.requests.lock().unwrap().push(request);
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::transport("no canned response queued")))
    }
}

pub fn client(transport: FakeTransport) -> Arc<ApiClient<FakeTransport>> {
    Arc::new(ApiClient::new(transport, BASE_URL).unwrap())
}

/// A backend-shaped short link body.
pub fn link_json(id: i64, code: &str, original_url: &str) -> serde_json::Value {
    json!({
        "id": id,
        "original_url": original_url,
        "short_code": code,
        "short_url": format!("http://localhost:8080/{code}"),
        "title": "",
        "click_count": 0,
        "created_at": "2026-03-05T14:30:00Z"
    })
}

/// A backend-shaped listing page.
pub fn page_json(
    links: Vec<serde_json::Value>,
    total: i64,
    page: u32,
    total_pages: u32,
) -> serde_json::Value {
    json!({
        "urls": links,
        "total": total,
        "page": page,
        "limit": 10,
        "total_pages": total_pages
    })
}
