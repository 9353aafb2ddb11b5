//! Transient UI feedback values.

use chrono::{DateTime, Duration, Utc};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short-lived, auto-dismissing message for the host to display.
///
/// Controllers queue at most one notice; the host consumes it with the
/// controller's `take_notice` and it is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// How long a "just copied" marker stays visible.
const COPY_FEEDBACK_TTL_MS: i64 = 1_000;

/// Ephemeral "just copied" marker for one short code.
///
/// Self-expires after a fixed delay; expiry is evaluated against an injected
/// instant so the behavior is deterministic under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    code: String,
    shown_at: DateTime<Utc>,
}

impl CopyFeedback {
    pub fn new(code: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            shown_at: now,
        }
    }

    /// The marked short code, or `None` once the marker has expired.
    pub fn active_code(&self, now: DateTime<Utc>) -> Option<&str> {
        if now - self.shown_at < Duration::milliseconds(COPY_FEEDBACK_TTL_MS) {
            Some(&self.code)
        } else {
            None
        }
    }
}
