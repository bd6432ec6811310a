//! HTTP surface over the query façade.

pub mod error;
pub mod handlers;
pub mod response;
pub mod state;

use crate::errors::AppResult;
use axum::Router;
use axum::routing::{get, post};
use state::AppState;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// ```text
/// GET  /health
/// GET  /events            ?from=&to=
/// POST /events            one event or an array
/// POST /events/clear
/// GET  /events/summary    ?from=&to=&by=
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/events",
            get(handlers::list_events).post(handlers::create_events),
        )
        .route("/events/clear", post(handlers::clear_events))
        .route("/events/summary", get(handlers::summary_events))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until SIGINT / SIGTERM.
pub async fn serve(state: AppState, addr: SocketAddr) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
