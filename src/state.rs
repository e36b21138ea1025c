use crate::config::Config;
use crate::tmdb::TmdbClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub tmdb: TmdbClient,
    pub config: Arc<Config>,
}
