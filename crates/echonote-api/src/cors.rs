//! CORS policy: enumerated origin allow-list.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Default allowed origins when `ALLOWED_ORIGINS` is not set.
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:8000"];

/// Parse allowed origins from the comma-separated `ALLOWED_ORIGINS`
/// environment variable.
///
/// Enforces strict origin whitelisting: no wildcard origins are ever
/// produced, and unparseable entries are dropped with a warning.
pub fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
    parse_origins_str(&origins_str)
}

fn parse_origins_str(origins_str: &str) -> Vec<HeaderValue> {
    if origins_str.trim().is_empty() {
        return DEFAULT_ORIGINS
            .into_iter()
            .map(HeaderValue::from_static)
            .collect();
    }

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

/// Build the CORS layer from the configured allow-list.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parse_allowed_origins()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600))
}
