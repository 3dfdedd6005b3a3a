//! Status handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use mottu_core::types::{ListPath, PagedResult};
use mottu_entity::Status;

use crate::dto::request::StatusRequest;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, RequestOrigin, ValidatedJson, parse_id};
use crate::state::AppState;

use super::{created, paged};

const BASE_PATH: &str = "/api/statuses";

/// GET /api/statuses
pub async fn list(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResult<Status>>, ApiError> {
    let page = params.page_request();
    let slice = state.status_service.list(&page).await?;
    Ok(paged(slice, &page, &origin, &ListPath::new(BASE_PATH)))
}

/// GET /api/statuses/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Status>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.status_service.get(id).await?))
}

/// POST /api/statuses
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<StatusRequest>,
) -> Result<Response, ApiError> {
    let row = state.status_service.create(req.into()).await?;
    Ok(created(BASE_PATH, row.id, row))
}

/// PUT /api/statuses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<StatusRequest>,
) -> Result<Json<Status>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.status_service.update(id, req.into()).await?))
}

/// DELETE /api/statuses/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.status_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
