//! CORS policy for browser clients.
//!
//! Policy:
//! - Development: permissive (Allow-Origin: *), WITHOUT credentials.
//! - Production: allowlist origins from Config (comma-separated env var), WITHOUT credentials.
//! - The configured API-key header is always an allowed request header, otherwise
//!   browsers cannot send the key at all.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::middleware::http::REQUEST_ID_HEADER;

pub fn apply(router: Router, config: &Config) -> Router {
    let cors = if config.app_env.is_production() {
        // Empty allowlist allows no origin at all.
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
            allowed.iter().any(|v| v == origin)
        });

        CorsLayer::new().allow_origin(allow_origin)
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    router.layer(
        cors.allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(allowed_headers(config))
            .max_age(std::time::Duration::from_secs(60 * 10)),
    )
}

fn allowed_headers(config: &Config) -> AllowHeaders {
    let mut headers = vec![
        header::CONTENT_TYPE,
        header::ACCEPT,
        HeaderName::from_static(REQUEST_ID_HEADER),
    ];

    if let Ok(name) = HeaderName::from_bytes(config.api_key.key_name().as_bytes()) {
        headers.push(name);
    }

    AllowHeaders::list(headers)
}
