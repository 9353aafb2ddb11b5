//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is issued.
//!
//! ## Variables
//!
//! - `API_BASE_URL` - Backend API base, including the `/api` prefix
//!   (default: `http://localhost:8080/api`). Must parse as an absolute URL.
//! - `REQUEST_TIMEOUT_SECS` - Per-request ceiling in seconds (default: 10).
//!   A timeout is reported like any other transport failure.
//! - `PAGE_LIMIT` - Items requested per history page (default: 10, min: 1).
//! - `RUST_LOG` - Log level (default: `info`).
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`).

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Default backend location when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for API requests, without a trailing slash.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub page_limit: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is set but not an absolute URL.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Url::parse(&api_base_url).context("API_BASE_URL must be an absolute URL")?;

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let page_limit = env::var("PAGE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10)
            .max(1);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_base_url,
            request_timeout_secs,
            page_limit,
            log_level,
            log_format,
        })
    }
}
