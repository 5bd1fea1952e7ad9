//! Shared HTTP context for all source adapters.
//!
//! One pooled reqwest client built at startup and passed into each adapter
//! at construction; connection reuse and timeout settings travel with it
//! rather than living in ambient state. JSON responses are cached with a
//! short TTL. There is no retry layer: each lookup is a single
//! timeout-bounded attempt, and failures are the caller's to absorb.

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;

use crate::config::{Config, services};
use crate::error::{ClientError, ClientResult};

/// Pooled HTTP client plus response cache, shared by every adapter.
#[derive(Clone)]
pub struct HttpContext {
    client: Client,
    cache: Cache<String, serde_json::Value>,
}

impl HttpContext {
    /// Build the shared client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "application/json, text/html".parse().expect("valid accept header"),
        );

        let client = Client::builder()
            .user_agent(services::USER_AGENT)
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(services::MAX_KEEPALIVE)
            .pool_idle_timeout(services::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(if config.cache_ttl.is_zero() {
                // moka rejects a zero TTL; a 1ms TTL is as good as off.
                Duration::from_millis(1)
            } else {
                config.cache_ttl
            })
            .build();

        Ok(Self { client, cache })
    }

    /// GET a JSON document, bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or an
    /// unparseable body.
    pub async fn get_json(
        &self,
        url: &str,
        params: &[(String, String)],
        timeout: Duration,
    ) -> ClientResult<serde_json::Value> {
        let cache_key = cache_key(url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            return Ok(cached);
        }

        let response = self.client.get(url).query(params).timeout(timeout).send().await?;
        let response = check_status(response).await?;
        let value: serde_json::Value = response.json().await?;

        self.cache.insert(cache_key, value.clone()).await;
        Ok(value)
    }

    /// GET an HTML page, bounded by `timeout`. Pages are not cached.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or non-success status.
    pub async fn get_html(
        &self,
        url: &str,
        params: &[(String, String)],
        timeout: Duration,
    ) -> ClientResult<String> {
        let response = self.client.get(url).query(params).timeout(timeout).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }
}

/// Map response status codes onto the error taxonomy.
async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::not_found(text))
        }
        500..=599 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::server(status.as_u16(), text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
        }
    }
}

/// Cache key over the full request shape.
fn cache_key(url: &str, params: &[(String, String)]) -> String {
    use md5::{Digest, Md5};

    let mut hasher = Md5::new();
    hasher.update(url.as_bytes());
    hasher.update(b"|");

    for (k, v) in params {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    format!("{:x}", hasher.finalize())
}

impl std::fmt::Debug for HttpContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpContext").finish_non_exhaustive()
    }
}
