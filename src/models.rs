use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Response type for the health endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub message: String,
    pub timestamp: String,
    pub path: String,
}

/// Error body for client input errors (bad method, missing path)
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Error body wrapping an upstream TMDB error, with the upstream status
/// mirrored and its full payload attached
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpstreamErrorResponse {
    pub error: String,
    pub status: u16,
    pub message: String,
    pub tmdb_error: JsonValue,
}

/// Error body for transport or unexpected failures; `details` is present
/// only in development mode
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProxyErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
