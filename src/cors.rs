use http::Method;
use http::header::{self, HeaderValue};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build a Tower CORS layer from the configured origin allow-list
///
/// Methods and headers match what the relay actually serves: GET/POST
/// with JSON bodies, optionally authorized.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config.origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
