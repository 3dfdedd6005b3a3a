//! Status group handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use mottu_core::types::{ListPath, PagedResult};
use mottu_entity::StatusGroup;

use crate::dto::request::StatusGrupoRequest;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, RequestOrigin, ValidatedJson, parse_id};
use crate::state::AppState;

use super::{created, paged};

const BASE_PATH: &str = "/api/statusgrupos";

/// GET /api/statusgrupos
pub async fn list(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResult<StatusGroup>>, ApiError> {
    let page = params.page_request();
    let slice = state.status_group_service.list(&page).await?;
    Ok(paged(slice, &page, &origin, &ListPath::new(BASE_PATH)))
}

/// GET /api/statusgrupos/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusGroup>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.status_group_service.get(id).await?))
}

/// POST /api/statusgrupos
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<StatusGrupoRequest>,
) -> Result<Response, ApiError> {
    let row = state.status_group_service.create(req.into()).await?;
    Ok(created(BASE_PATH, row.id, row))
}

/// PUT /api/statusgrupos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<StatusGrupoRequest>,
) -> Result<Json<StatusGroup>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.status_group_service.update(id, req.into()).await?))
}

/// DELETE /api/statusgrupos/{id}
///
/// Refused with 400 while any status still belongs to the group.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.status_group_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
