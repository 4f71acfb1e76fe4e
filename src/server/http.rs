//! HTTP server implementation for the relay.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use tokio::signal;

use super::config::ServerConfig;
use super::handlers::{AppState, handle_healthy, handle_log, handle_metrics, handle_ready};
use super::metrics::Metrics;
use super::middleware::track_requests;
use crate::reader::LogReader;

/// HTTP server for the relay log.
pub struct RelayServer {
    log: LogReader,
    config: ServerConfig,
}

impl RelayServer {
    /// Create a new relay server over a read-only log view.
    pub fn new(log: LogReader, config: ServerConfig) -> Self {
        Self { log, config }
    }

    /// Build the router serving the relay routes.
    ///
    /// Split out from [`run`](RelayServer::run) so integration tests can
    /// drive the router without binding a socket.
    pub fn router(log: LogReader, metrics: Arc<Metrics>) -> Router {
        let state = AppState { log, metrics };

        Router::new()
            .route("/api/v1/log", get(handle_log))
            .route("/metrics", get(handle_metrics))
            .route("/-/healthy", get(handle_healthy))
            .route("/-/ready", get(handle_ready))
            .layer(from_fn_with_state(state.clone(), track_requests))
            .with_state(state)
    }

    /// Run the HTTP server.
    pub async fn run(self) {
        let metrics = Arc::new(Metrics::new());
        let app = Self::router(self.log, metrics);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        tracing::info!("Starting relay HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .unwrap();

        tracing::info!("Server shut down gracefully");
    }
}

/// Listen for SIGTERM (pod termination) and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
