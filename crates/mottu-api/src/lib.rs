//! # mottu-api
//!
//! HTTP API layer for Mottu Vision built on Axum.
//!
//! Provides the REST endpoints for users, zones, yards, status groups,
//! statuses and motos, the middleware stack (CORS, logging, tracing,
//! timeout, compression), extractors, request DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server, shutdown_signal};
pub use error::ApiError;
pub use state::AppState;
