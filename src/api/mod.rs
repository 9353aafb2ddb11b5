//! Typed API layer: wire DTOs, the transport seam, and the client.

pub mod client;
pub mod dto;
pub mod transport;

pub use client::ApiClient;
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, ReqwestTransport};
