//! DTO for the backend health endpoint.

use serde::{Deserialize, Serialize};

/// Health report from the backend's origin-root `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
