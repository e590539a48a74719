//! Error responses.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tourbench_core::TourBenchError;

use crate::dto::ErrorResponse;

/// Failure of an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body missing, malformed or out of range.
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Solver(#[from] TourBenchError),

    #[error("solve exceeded the {}s time limit", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Solver(TourBenchError::Cancelled) | ApiError::Timeout(_) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            ApiError::Solver(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
