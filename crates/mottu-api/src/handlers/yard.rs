//! Yard handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use mottu_core::types::{ListPath, PagedResult};
use mottu_entity::Yard;

use crate::dto::request::PatioRequest;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, RequestOrigin, ValidatedJson, parse_id};
use crate::state::AppState;

use super::{created, paged};

const BASE_PATH: &str = "/api/patios";

/// GET /api/patios
pub async fn list(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResult<Yard>>, ApiError> {
    let page = params.page_request();
    let slice = state.yard_service.list(&page).await?;
    Ok(paged(slice, &page, &origin, &ListPath::new(BASE_PATH)))
}

/// GET /api/patios/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Yard>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.yard_service.get(id).await?))
}

/// POST /api/patios
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PatioRequest>,
) -> Result<Response, ApiError> {
    let row = state.yard_service.create(req.into()).await?;
    Ok(created(BASE_PATH, row.id, row))
}

/// PUT /api/patios/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<PatioRequest>,
) -> Result<Json<Yard>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.yard_service.update(id, req.into()).await?))
}

/// DELETE /api/patios/{id}
///
/// Refused with 400 while any moto is parked in the yard.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.yard_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
