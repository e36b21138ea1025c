use crate::models::HealthResponse;
use crate::routes;
use axum::{extract::OriginalUri, http::StatusCode, Json};

/// GET /health handler - Liveness check
///
/// Always returns 200 with a timestamp and the inbound path echoed back.
/// No upstream interaction, so there is no unhealthy branch.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check");
    (
        StatusCode::OK,
        Json(HealthResponse {
            message: "TMDB Proxy is working!".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            path: uri.path().to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use crate::tmdb::TmdbClient;
    use axum::{body::Body, http::Request, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Arc::new(Config {
            tmdb_api_key: "test-key".to_string(),
            tmdb_base_url: "http://127.0.0.1:9".to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            environment: Environment::Production,
        });
        let tmdb = TmdbClient::from_config(&config).unwrap();
        routes::router(AppState { tmdb, config })
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.message, "TMDB Proxy is working!");
        assert_eq!(health.path, "/health");
        assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_ignores_query_params() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health?verbose=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.path, "/health");
    }
}
