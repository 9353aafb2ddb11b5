//! # shorter-client
//!
//! Client library for the "shorter" URL-shortening service: submits long URLs
//! for shortening, browses a paginated history of short links, and surfaces
//! per-link metadata (click counts, creation time, QR code). The backend is
//! reached only through its fixed HTTP contract; short-code allocation,
//! persistence, and click counting all live server-side.
//!
//! ## Architecture
//!
//! - **API layer** ([`api`]) - wire DTOs, the [`api::HttpTransport`] seam,
//!   and the typed [`api::ApiClient`]
//! - **Application layer** ([`application`]) - the submission and listing
//!   controllers that turn raw input into validated requests and paged
//!   responses into navigable view state
//! - **Utilities** ([`utils`]) - pure validators and formatters, plus the
//!   best-effort clipboard adapter
//!
//! ## Quick start
//!
//! ```no_run
//! use shorter_client::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let transport = ReqwestTransport::new(Duration::from_secs(10))?;
//! let client = Arc::new(ApiClient::new(transport, "http://localhost:8080/api")?);
//!
//! let mut form = SubmissionController::new(client.clone());
//! form.set_url_input("example.com/some/long/path");
//!
//! if let SubmitOutcome::Created(link) = form.submit().await {
//!     println!("{}", link.short_url);
//!
//!     let mut list = ListController::new(client, 10);
//!     list.refresh().await;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The CLI binary loads [`config::Config`] from environment variables; see
//! the [`config`] module for the list.

pub mod api;
pub mod application;
pub mod config;
pub mod error;
pub mod utils;

pub use error::{ApiError, ValidationErrors};

/// Commonly used types for consumers and integration tests.
pub mod prelude {
    pub use crate::api::dto::{ClickStats, CreateRequest, HealthStatus, Page, ShortLink};
    pub use crate::api::{ApiClient, HttpTransport, ReqwestTransport};
    pub use crate::application::{
        ListController, Notice, NoticeLevel, SubmissionController, SubmitOutcome, SubmitState,
    };
    pub use crate::config::Config;
    pub use crate::error::{ApiError, ValidationErrors};
}
