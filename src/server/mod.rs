//! HTTP boundary.
//!
//! A single root route that accepts any method, runs the enrichment pipeline
//! for the caller and writes the JSON document (or a plain-text 500).
//!
//! The server shuts down gracefully on Ctrl-C or SIGTERM.

mod handlers;
mod types;

use std::future::Future;
use std::net::SocketAddr;

use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;

pub use handlers::enrich_handler;
pub use types::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(enrich_handler))
        .with_state(state)
}

/// Serves requests on `listener` until `shutdown` resolves.
///
/// Each connection is handled on its own task; requests share nothing but
/// the read-only pipeline and its atomic counters.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("Listening on http://{}/", addr);
    }

    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {}", e);
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
                log::warn!("Failed to listen for SIGTERM: {}", e);
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

    log::info!("Shutdown signal received, draining connections");
}
