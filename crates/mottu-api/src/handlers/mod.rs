//! Route handlers organized by resource.

pub mod health;
pub mod moto;
pub mod status;
pub mod status_group;
pub mod user;
pub mod yard;
pub mod zone;

use axum::Json;
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mottu_core::types::{ListPath, PageRequest, PageSlice, PagedResult};

use crate::extractors::RequestOrigin;

/// 201 with a `Location` header pointing at the new row.
pub(crate) fn created<T: Serialize>(base_path: &str, id: i64, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(LOCATION, format!("{base_path}/{id}"))],
        Json(body),
    )
        .into_response()
}

/// Wrap one page of rows in the list envelope.
pub(crate) fn paged<T>(
    slice: PageSlice<T>,
    page: &PageRequest,
    origin: &RequestOrigin,
    path: &ListPath,
) -> Json<PagedResult<T>> {
    Json(PagedResult::assemble(slice, page, &origin.0, path))
}
