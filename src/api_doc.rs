use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ErrorResponse, HealthResponse, ProxyErrorResponse, UpstreamErrorResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "tmdb-proxy API",
        version = "1.0.0",
        description = "A thin CORS-friendly reverse proxy in front of the TMDB API"
    ),
    paths(handlers::health::health_handler, handlers::proxy::proxy_handler),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            UpstreamErrorResponse,
            ProxyErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness operations"),
        (name = "proxy", description = "TMDB forwarding operations")
    )
)]
pub struct ApiDoc;
