use anyhow::{Context, Result};
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde_json::Value as JsonValue;
use std::time::Instant;

use crate::config::Config;

/// Client identifier sent with every forwarded request
const USER_AGENT: &str = concat!("tmdb-proxy/", env!("CARGO_PKG_VERSION"));

/// Result of one forwarded call: upstream status, success flag per the
/// transport, and the parsed JSON body
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub ok: bool,
    pub body: JsonValue,
}

/// Shareable TMDB client for use across async handlers
///
/// Holds one reqwest client for the process lifetime. No timeout is
/// configured; the transport default governs how long a call may block.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http,
            base_url: config.tmdb_base_url.clone(),
            api_key: config.tmdb_api_key.clone(),
        })
    }

    /// Forward a GET to `<base>/<path>` with the inbound query pairs plus the
    /// api_key credential. Latency is measured for logging only.
    pub async fn get(&self, path: &str, params: &[(String, String)]) -> Result<UpstreamReply> {
        let url = build_upstream_url(&self.base_url, path, params, &self.api_key)?;

        tracing::info!(upstream_path = %path, "Proxying GET to TMDB");

        let started = Instant::now();
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context("request to TMDB failed")?;
        let elapsed = started.elapsed();

        let status = response.status().as_u16();
        let ok = response.status().is_success();

        tracing::info!(
            status,
            elapsed_ms = elapsed.as_millis() as u64,
            "TMDB responded"
        );

        let body: JsonValue = response
            .json()
            .await
            .context("TMDB response was not valid JSON")?;

        Ok(UpstreamReply { status, ok, body })
    }
}

/// Build the upstream URL: base + `/` + path, then every inbound query pair
/// verbatim, then exactly one api_key pair. An inbound api_key is dropped so
/// the configured credential always wins.
fn build_upstream_url(
    base: &str,
    path: &str,
    params: &[(String, String)],
    api_key: &str,
) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))
        .with_context(|| format!("invalid upstream URL for path '{}'", path))?;

    {
        let mut query = url.query_pairs_mut();
        for (key, value) in params {
            if key == "api_key" {
                continue;
            }
            query.append_pair(key, value);
        }
        query.append_pair("api_key", api_key);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(input: &[(&str, &str)]) -> Vec<(String, String)> {
        input
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let url = build_upstream_url("https://api.themoviedb.org/3", "trending/movie/week", &[], "secret")
            .unwrap();

        assert_eq!(url.host_str(), Some("api.themoviedb.org"));
        assert_eq!(url.path(), "/3/trending/movie/week");
    }

    #[test]
    fn test_url_carries_all_params_plus_one_credential() {
        let params = pairs(&[("language", "en-US"), ("page", "1")]);
        let url = build_upstream_url("https://api.themoviedb.org/3", "search/movie", &params, "secret")
            .unwrap();

        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(query.contains(&("language".to_string(), "en-US".to_string())));
        assert!(query.contains(&("page".to_string(), "1".to_string())));

        let credentials: Vec<_> = query.iter().filter(|(k, _)| k == "api_key").collect();
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].1, "secret");
    }

    #[test]
    fn test_url_replaces_inbound_credential_with_configured_one() {
        let params = pairs(&[("api_key", "caller-key"), ("page", "1")]);
        let url = build_upstream_url("https://api.themoviedb.org/3", "movie/550", &params, "secret")
            .unwrap();

        let credentials: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| k == "api_key")
            .map(|(_, v)| v.into_owned())
            .collect();

        assert_eq!(credentials, vec!["secret"]);
        assert!(url.query().unwrap().contains("page=1"));
    }

    #[test]
    fn test_url_preserves_duplicate_params() {
        let params = pairs(&[("with_genres", "28"), ("with_genres", "12")]);
        let url =
            build_upstream_url("https://api.themoviedb.org/3", "discover/movie", &params, "secret")
                .unwrap();

        let genre_values: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| k == "with_genres")
            .map(|(_, v)| v.into_owned())
            .collect();

        assert_eq!(genre_values, vec!["28", "12"]);
    }

    #[test]
    fn test_url_params_are_percent_encoded() {
        let params = pairs(&[("query", "the lord of the rings")]);
        let url = build_upstream_url("https://api.themoviedb.org/3", "search/movie", &params, "secret")
            .unwrap();

        assert!(url.query().unwrap().contains("query=the+lord+of+the+rings"));
    }

    #[test]
    fn test_url_tolerates_trailing_slash_on_base() {
        let url = build_upstream_url("http://localhost:9010/3/", "movie/550", &[], "secret").unwrap();

        assert_eq!(url.path(), "/3/movie/550");
    }
}
