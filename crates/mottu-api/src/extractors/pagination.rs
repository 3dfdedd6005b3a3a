//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use mottu_core::types::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest};

/// Query parameters for paginated endpoints.
///
/// Values are kept as raw strings so that a non-numeric `page` or
/// `pageSize` falls back to its default instead of failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default: 20, max: 100).
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    /// Case-insensitive plate fragment; only the moto list reads it.
    pub placa: Option<String>,
}

fn parse_or(raw: Option<&str>, default: u64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default as i64)
}

impl PaginationParams {
    /// Converts to a normalized `PageRequest`.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::normalize(
            parse_or(self.page.as_deref(), DEFAULT_PAGE),
            parse_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
        )
    }

    /// The plate filter, if one was given and is not blank.
    pub fn placa(&self) -> Option<&str> {
        self.placa.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}
