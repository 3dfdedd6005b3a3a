//! Zone handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use mottu_core::types::{ListPath, PagedResult};
use mottu_entity::Zone;

use crate::dto::request::ZonaRequest;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, RequestOrigin, ValidatedJson, parse_id};
use crate::state::AppState;

use super::{created, paged};

const BASE_PATH: &str = "/api/zonas";

/// GET /api/zonas
pub async fn list(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResult<Zone>>, ApiError> {
    let page = params.page_request();
    let slice = state.zone_service.list(&page).await?;
    Ok(paged(slice, &page, &origin, &ListPath::new(BASE_PATH)))
}

/// GET /api/zonas/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Zone>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.zone_service.get(id).await?))
}

/// POST /api/zonas
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ZonaRequest>,
) -> Result<Response, ApiError> {
    let row = state.zone_service.create(req.into()).await?;
    Ok(created(BASE_PATH, row.id, row))
}

/// PUT /api/zonas/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<ZonaRequest>,
) -> Result<Json<Zone>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.zone_service.update(id, req.into()).await?))
}

/// DELETE /api/zonas/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.zone_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
