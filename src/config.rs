use std::env;
use anyhow::{Context, Result};

/// Runtime mode, controls whether error responses carry diagnostic detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    fn parse(value: &str) -> Result<Self> {
        match value {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => anyhow::bail!(
                "APP_ENV must be 'development' or 'production', got '{}'",
                other
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub service_port: u16,
    pub service_host: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let tmdb_api_key = env::var("TMDB_API_KEY")
            .context("TMDB_API_KEY environment variable is required")?;

        let tmdb_base_url = env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let environment = match env::var("APP_ENV") {
            Ok(value) => Environment::parse(&value)?,
            Err(_) => Environment::Production,
        };

        Ok(Config {
            tmdb_api_key,
            tmdb_base_url,
            service_port,
            service_host,
            environment,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  TMDB base URL: {}", self.tmdb_base_url);
        tracing::info!("  TMDB API key: configured");
        tracing::info!("  Environment: {:?}", self.environment);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
