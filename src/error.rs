//! Client error types.
//!
//! Two channels exist and never mix:
//!
//! - [`ValidationErrors`] — synchronous field-level problems caught before any
//!   network traffic, shown inline next to the offending field.
//! - [`ApiError`] — a request was attempted and failed. The variant records
//!   whether the backend rejected it ([`ApiError::Application`]) or the request
//!   never produced a readable response ([`ApiError::Transport`]), so callers
//!   can special-case retryable failures. The kind is flattened to a plain
//!   message only at the presentation boundary via `Display`.

use thiserror::Error;

/// Failure of an API request.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The backend received a well-formed request and rejected it with a
    /// structured error body (e.g. a duplicate custom code).
    #[error("{message}")]
    Application {
        /// HTTP status the backend answered with.
        status: u16,
        /// Backend-supplied message, surfaced verbatim.
        message: String,
    },

    /// The request never completed: connection failure, timeout, or a
    /// response body that could not be decoded.
    #[error("{message}")]
    Transport { message: String },
}

impl ApiError {
    pub fn application(status: u16, message: impl Into<String>) -> Self {
        Self::Application {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Transport failures are worth retrying as-is; application rejections
    /// need a changed request first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// The message shown to the user, without the structured kind.
    pub fn message(&self) -> &str {
        match self {
            Self::Application { message, .. } | Self::Transport { message } => message,
        }
    }
}

/// Per-field validation results for the create-link form.
///
/// An absent message means the field is valid. Recomputed from scratch on
/// every submit attempt and cleared on success or reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub url: Option<String>,
    pub custom_code: Option<String>,
}

impl ValidationErrors {
    /// True when every field passed and submission may proceed.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.custom_code.is_none()
    }
}
