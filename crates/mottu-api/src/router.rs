//! Route definitions for the Mottu Vision HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the API router without middleware.
///
/// [`crate::app::build_app`] wraps it in the middleware stack.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(zone_routes())
        .merge(yard_routes())
        .merge(status_group_routes())
        .merge(status_routes())
        .merge(moto_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// `/api/usuarios`
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/usuarios",
            get(handlers::user::list).post(handlers::user::create),
        )
        .route(
            "/usuarios/{id}",
            get(handlers::user::get)
                .put(handlers::user::update)
                .delete(handlers::user::delete),
        )
}

/// `/api/zonas`
fn zone_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/zonas",
            get(handlers::zone::list).post(handlers::zone::create),
        )
        .route(
            "/zonas/{id}",
            get(handlers::zone::get)
                .put(handlers::zone::update)
                .delete(handlers::zone::delete),
        )
}

/// `/api/patios`
fn yard_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/patios",
            get(handlers::yard::list).post(handlers::yard::create),
        )
        .route(
            "/patios/{id}",
            get(handlers::yard::get)
                .put(handlers::yard::update)
                .delete(handlers::yard::delete),
        )
}

/// `/api/statusgrupos`
fn status_group_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/statusgrupos",
            get(handlers::status_group::list).post(handlers::status_group::create),
        )
        .route(
            "/statusgrupos/{id}",
            get(handlers::status_group::get)
                .put(handlers::status_group::update)
                .delete(handlers::status_group::delete),
        )
}

/// `/api/statuses`
fn status_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/statuses",
            get(handlers::status::list).post(handlers::status::create),
        )
        .route(
            "/statuses/{id}",
            get(handlers::status::get)
                .put(handlers::status::update)
                .delete(handlers::status::delete),
        )
}

/// `/api/motos`
fn moto_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/motos",
            get(handlers::moto::list).post(handlers::moto::create),
        )
        .route(
            "/motos/{id}",
            get(handlers::moto::get)
                .put(handlers::moto::update)
                .delete(handlers::moto::delete),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
