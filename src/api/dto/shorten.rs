//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// The URL must already be protocol-normalized and validated; this type is
/// pure transport shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRequest {
    pub url: String,

    /// User-chosen short code. `None` means the backend assigns one; the
    /// field is omitted from the wire entirely in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
}

/// A backend-issued short link.
///
/// Immutable from the client's perspective: the client never mutates a
/// `ShortLink`, only re-fetches it. Successful creation returns the same
/// shape, so this type serves both the create and list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    /// Globally-unique lookup key, visible in the short URL.
    pub short_code: String,
    pub short_url: String,
    /// Page title scraped by the backend; may be empty.
    #[serde(default)]
    pub title: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_omits_unset_custom_code() {
        let request = CreateRequest {
            url: "https://example.com".to_string(),
            custom_code: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "url": "https://example.com" }));
    }

    #[test]
    fn create_request_serializes_custom_code_when_present() {
        let request = CreateRequest {
            url: "https://example.com".to_string(),
            custom_code: Some("my-code1".to_string()),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["custom_code"], "my-code1");
    }

    #[test]
    fn short_link_deserializes_backend_shape() {
        let body = json!({
            "id": 42,
            "original_url": "https://example.com/a/b",
            "short_code": "abc123",
            "short_url": "http://localhost:8080/abc123",
            "title": "Example",
            "click_count": 7,
            "created_at": "2026-03-05T14:30:00Z"
        });

        let link: ShortLink = serde_json::from_value(body).unwrap();
        assert_eq!(link.id, 42);
        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.click_count, 7);
    }

    #[test]
    fn short_link_tolerates_missing_title() {
        let body = json!({
            "id": 1,
            "original_url": "https://example.com",
            "short_code": "x1y2z3",
            "short_url": "http://localhost:8080/x1y2z3",
            "click_count": 0,
            "created_at": "2026-03-05T14:30:00Z"
        });

        let link: ShortLink = serde_json::from_value(body).unwrap();
        assert!(link.title.is_empty());
    }
}
