//! Application builder: wires router, middleware and state into an Axum
//! app and serves it.

use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use mottu_core::config::AppConfig;
use mottu_core::error::AppError;
use mottu_database::DataStore;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::middleware::timeout::build_timeout_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;
    let cors = build_cors_layer(&server.cors);
    let timeout = build_timeout_layer(server.request_timeout_seconds);

    build_router(state)
        .layer(build_compression_layer())
        .layer(timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}

/// Serve the API until `shutdown` resolves.
///
/// After the signal, in-flight requests get `server.shutdown_grace_seconds`
/// to finish before the remaining connections are dropped. The store's
/// pool is closed on the way out.
pub async fn run_server<F>(
    config: AppConfig,
    store: DataStore,
    shutdown: F,
) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = build_app(AppState::new(config, store.clone()));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "Mottu Vision API listening");

    let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    let mut server = std::pin::pin!(server);

    let result = tokio::select! {
        res = &mut server => res,
        Ok(()) = signalled_rx => {
            info!(
                grace_seconds = grace.as_secs(),
                "Shutdown signal received, draining connections"
            );
            match tokio::time::timeout(grace, server).await {
                Ok(res) => res,
                Err(_) => {
                    warn!("Grace period elapsed, dropping remaining connections");
                    Ok(())
                }
            }
        }
    };

    store.close().await;
    result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
    info!("Mottu Vision API stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
