//! Request-tracking middleware.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::AppState;
use super::metrics::{HttpLabels, HttpLabelsWithStatus, HttpMethod};

/// Records request counts, latency, and in-flight gauge for every route.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = HttpMethod::from(request.method());
    let endpoint = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let start = Instant::now();

    let response = next.run(request).await;

    state.metrics.http_requests_in_flight.dec();
    state
        .metrics
        .http_request_duration_seconds
        .get_or_create(&HttpLabels {
            method: method.clone(),
            endpoint: endpoint.clone(),
        })
        .observe(start.elapsed().as_secs_f64());
    state
        .metrics
        .http_requests_total
        .get_or_create(&HttpLabelsWithStatus {
            method,
            endpoint,
            status: response.status().as_u16(),
        })
        .inc();

    response
}
