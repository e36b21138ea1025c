use crate::error::ApiError;
use crate::models::{ErrorResponse, ProxyErrorResponse, UpstreamErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde_json::Value as JsonValue;

/// Cache directive attached to successful proxied responses
const CACHE_CONTROL_VALUE: &str = "s-maxage=3600, stale-while-revalidate";

/// GET /api/{*path} handler - Forward a request to TMDB
///
/// The wildcard capture is normalized into slash-joined segments; an empty
/// path is rejected before any upstream call. Every inbound query pair is
/// forwarded verbatim and the API key credential is appended. On success the
/// upstream body is returned unmodified with a shared-cache directive; an
/// upstream error status is mirrored back wrapped in a structured body.
#[utoipa::path(
    get,
    path = "/api/{path}",
    params(
        ("path" = String, Path, description = "Upstream TMDB path, e.g. trending/movie/week")
    ),
    responses(
        (status = 200, description = "Upstream JSON body, forwarded verbatim", body = serde_json::Value),
        (status = 400, description = "Empty API path", body = ErrorResponse),
        (status = 405, description = "Method other than GET or OPTIONS", body = ErrorResponse),
        (status = 500, description = "Transport or unexpected failure", body = ProxyErrorResponse),
        (status = "default", description = "Upstream error, status mirrored", body = UpstreamErrorResponse)
    ),
    tag = "proxy"
)]
pub async fn proxy_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, [(HeaderName, &'static str); 1], Json<JsonValue>), ApiError> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Err(ApiError::MissingPath);
    }
    let tmdb_path = segments.join("/");

    let reply = state
        .tmdb
        .get(&tmdb_path, &params)
        .await
        .map_err(|err| ApiError::proxy(err, state.config.environment.is_development()))?;

    if !reply.ok {
        return Err(ApiError::Upstream {
            status: reply.status,
            body: reply.body,
        });
    }

    Ok((
        StatusCode::OK,
        [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
        Json(reply.body),
    ))
}

/// Fallback for unsupported methods on the proxy routes
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Handler for bare `/api` and `/api/`, where there is no wildcard capture
pub async fn missing_path() -> ApiError {
    ApiError::MissingPath
}
