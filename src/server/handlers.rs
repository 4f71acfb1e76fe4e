//! HTTP route handlers for the relay server.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use super::metrics::Metrics;
use crate::reader::{LogRead, LogReader};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub log: LogReader,
    pub metrics: Arc<Metrics>,
}

/// Handle GET /api/v1/log
///
/// Reads the log fresh and returns its current byte contents verbatim as
/// `text/plain`. Returns 404 while the log does not exist yet.
pub async fn handle_log(State(state): State<AppState>) -> Result<Response, ApiError> {
    let contents = state.log.read_all().await?;

    state.metrics.log_reads_total.inc();
    state
        .metrics
        .log_read_bytes_total
        .inc_by(contents.len() as u64);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        contents,
    )
        .into_response())
}

/// Handle GET /metrics
pub async fn handle_metrics(State(state): State<AppState>) -> String {
    state.metrics.encode()
}

/// Handle GET /-/healthy
pub async fn handle_healthy() -> &'static str {
    "ok"
}

/// Handle GET /-/ready
///
/// The server is ready as soon as it can serve; the log's absence is a
/// valid (empty) state, not unreadiness.
pub async fn handle_ready() -> &'static str {
    "ok"
}
