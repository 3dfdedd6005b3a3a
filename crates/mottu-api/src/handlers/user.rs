//! User handlers.
//!
//! Responses carry `id` and `usuario` only; the password hash stays in
//! the store.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use mottu_core::types::{ListPath, PagedResult};
use mottu_entity::User;

use crate::dto::request::UsuarioRequest;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, RequestOrigin, ValidatedJson, parse_id};
use crate::state::AppState;

use super::{created, paged};

const BASE_PATH: &str = "/api/usuarios";

/// GET /api/usuarios
pub async fn list(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResult<User>>, ApiError> {
    let page = params.page_request();
    let slice = state.user_service.list(&page).await?;
    Ok(paged(slice, &page, &origin, &ListPath::new(BASE_PATH)))
}

/// GET /api/usuarios/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.user_service.get(id).await?))
}

/// POST /api/usuarios
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UsuarioRequest>,
) -> Result<Response, ApiError> {
    let row = state.user_service.create(req.into()).await?;
    Ok(created(BASE_PATH, row.id, row))
}

/// PUT /api/usuarios/{id}
///
/// Replaces both the name and the password.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UsuarioRequest>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.user_service.update(id, req.into()).await?))
}

/// DELETE /api/usuarios/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
