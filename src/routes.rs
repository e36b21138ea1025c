// Route path constants and router wiring - single source of truth for all API paths

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{MethodFilter, get, on};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{health_handler, method_not_allowed, missing_path, proxy_handler};
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const API_ROOT: &str = "/api";
pub const API_PROXY: &str = "/api/{*path}";

/// Build the service router.
///
/// The CORS layer carries the shared permissive header set on every response
/// and answers OPTIONS preflights with 200 and an empty body before any
/// handler runs, so no upstream call can happen for a preflight. The proxy
/// routes accept GET only (`MethodFilter::GET`, not `get()`, which would also
/// serve HEAD); everything else falls through to the 405 handler. Bare `/api`
/// and `/api/` have no wildcard capture and are rejected as missing paths.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let no_path = on(MethodFilter::GET, missing_path).fallback(method_not_allowed);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(HEALTH, get(health_handler))
        .route(API_ROOT, no_path.clone())
        .route("/api/", no_path)
        .route(
            API_PROXY,
            on(MethodFilter::GET, proxy_handler).fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
