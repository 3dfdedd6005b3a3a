//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the data store answers, `degraded` otherwise.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `up` or `down`.
    pub database: String,
}
