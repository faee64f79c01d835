//! API error type and HTTP status mapping.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// Errors surfaced by HTTP handlers.
///
/// Every variant renders as the standard response envelope
/// `{"success": false, "message": "..."}` with the matching status code.
#[derive(Debug)]
pub enum ApiError {
    Database(echonote_core::Error),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
}

impl From<echonote_core::Error> for ApiError {
    fn from(err: echonote_core::Error) -> Self {
        match err {
            echonote_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            echonote_core::Error::UserNotFound(id) => {
                ApiError::NotFound(format!("User {} not found", id))
            }
            echonote_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            echonote_core::Error::Unauthorized(msg) => ApiError::Unauthorized(msg),
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}
