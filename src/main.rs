mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod tmdb;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use state::AppState;
use tmdb::TmdbClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("tmdb-proxy starting");

    let config = Arc::new(Config::from_env()?);
    config.log_startup();

    let tmdb = TmdbClient::from_config(&config)?;
    let app = routes::router(AppState {
        tmdb,
        config: Arc::clone(&config),
    });

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
