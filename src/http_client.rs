use std::time::Duration;

use axum::http;
use reqwest::Client;

/// Build the HTTP client used for provider calls
///
/// Constructed once at startup and cloned into the provider; connections
/// are reused across requests via keep-alive.
pub fn http_client() -> Client {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
        .expect("Failed to build default HTTP client")
}
