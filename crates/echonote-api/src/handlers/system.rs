//! Service banner and health endpoints.

use axum::{response::IntoResponse, Json};

/// Service banner at the root path.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": "echonote API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "echonote-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
