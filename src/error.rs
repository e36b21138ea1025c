use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value as JsonValue;

use crate::models::{ErrorResponse, ProxyErrorResponse, UpstreamErrorResponse};

/// Custom error type for the proxy endpoints
///
/// Distinguishes the three failure classes: client input errors (no upstream
/// call happens), upstream application errors (upstream status is mirrored),
/// and transport or otherwise unexpected errors (uniform 500). Each variant
/// maps to a structured JSON body. Malformed upstream JSON lands in `Proxy`
/// together with network failures, matching the behavior this service mirrors.
#[derive(Debug)]
pub enum ApiError {
    /// Inbound method was neither GET nor OPTIONS
    MethodNotAllowed,
    /// No upstream path segments after `/api`
    MissingPath,
    /// Upstream answered with a non-success status
    Upstream { status: u16, body: JsonValue },
    /// Transport failure, malformed upstream JSON, or any other unexpected error
    Proxy {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    /// Wrap an unexpected failure; diagnostic detail is attached only in
    /// development mode.
    pub fn proxy(err: anyhow::Error, include_details: bool) -> Self {
        ApiError::Proxy {
            message: err.to_string(),
            details: include_details.then(|| format!("{:?}", err)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => {
                tracing::debug!("Rejected request with unsupported method");
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    Json(ErrorResponse {
                        error: "Method not allowed".to_string(),
                        message: "Only GET requests are supported".to_string(),
                        example: None,
                    }),
                )
                    .into_response()
            }
            ApiError::MissingPath => {
                tracing::debug!("Rejected request with empty API path");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "Bad request".to_string(),
                        message: "API path is required".to_string(),
                        example: Some("/api/trending/movie/week".to_string()),
                    }),
                )
                    .into_response()
            }
            ApiError::Upstream { status, body } => {
                tracing::warn!(status, "TMDB returned an error status");
                let message = body
                    .get("status_message")
                    .and_then(JsonValue::as_str)
                    .unwrap_or("Unknown error")
                    .to_string();
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    Json(UpstreamErrorResponse {
                        error: "TMDB API error".to_string(),
                        status,
                        message,
                        tmdb_error: body,
                    }),
                )
                    .into_response()
            }
            ApiError::Proxy { message, details } => {
                tracing::error!(%message, "Proxy request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProxyErrorResponse {
                        error: "Proxy error".to_string(),
                        message,
                        details,
                    }),
                )
                    .into_response()
            }
        }
    }
}
