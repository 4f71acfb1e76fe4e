//! HTTP error mapping for the relay server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::Error;

/// Error type returned by route handlers.
///
/// Maps log errors onto HTTP statuses: a missing log file is `404 Not
/// Found` (the producer has not written yet), everything else is `500`.
#[derive(Debug)]
pub enum ApiError {
    /// The log file does not exist yet.
    NotFound,
    /// Any other failure while reading the log.
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "log not found\n").into_response(),
            ApiError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error\n").into_response()
            }
        }
    }
}
