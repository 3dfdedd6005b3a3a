//! Moto handlers.
//!
//! Reads return the moto with its zone, yard and status joined in; writes
//! echo the stored row as-is.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use mottu_core::types::{ListPath, PagedResult};
use mottu_entity::{Moto, MotoDetails};

use crate::dto::request::MotoRequest;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, RequestOrigin, ValidatedJson, parse_id};
use crate::state::AppState;

use super::{created, paged};

const BASE_PATH: &str = "/api/motos";

/// GET /api/motos?page=&pageSize=&placa=
///
/// The plate filter is carried into the `self`/`prev`/`next` links so
/// that following them stays within the filtered listing.
pub async fn list(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResult<MotoDetails>>, ApiError> {
    let page = params.page_request();
    let placa = params.placa();
    let slice = state.moto_service.list(&page, placa).await?;

    let path = match placa {
        Some(p) => ListPath::new(BASE_PATH).with_param("placa", p),
        None => ListPath::new(BASE_PATH),
    };
    Ok(paged(slice, &page, &origin, &path))
}

/// GET /api/motos/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MotoDetails>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.moto_service.get(id).await?))
}

/// POST /api/motos
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<MotoRequest>,
) -> Result<Response, ApiError> {
    let moto = state.moto_service.create(req.into()).await?;
    Ok(created(BASE_PATH, moto.id, moto))
}

/// PUT /api/motos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<MotoRequest>,
) -> Result<Json<Moto>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.moto_service.update(id, req.into()).await?))
}

/// DELETE /api/motos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.moto_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
