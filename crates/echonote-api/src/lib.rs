//! # echonote-api
//!
//! HTTP API server for echonote: user authentication, note storage, and
//! legacy transcript retrieval over JSON.
//!
//! The router is exposed as [`app`] so integration tests can drive it with
//! stub repositories instead of a live database.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod request_id;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use error::ApiError;
pub use state::AppState;

use handlers::{
    auth::{login, register},
    notes::{get_user_notes, save_note},
    system::{health_check, index},
    transcripts::{get_user_transcripts, save_transcript},
    users::{get_user, list_users},
};

/// Maximum accepted request body size. Transcripts can be long, note bodies
/// are otherwise small.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the application router with all routes and middleware layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        // Auth
        .route("/login", post(login))
        .route("/register", post(register))
        // Users
        .route("/users", get(list_users))
        .route("/user/:id", get(get_user))
        // Notes
        .route("/userdata", post(save_note))
        .route("/userdata/:user_id", get(get_user_notes))
        // Legacy transcript endpoints, superseded by /userdata
        .route("/transcripts", post(save_transcript))
        .route("/transcripts/:user_id", get(get_user_transcripts))
        .layer(SetRequestIdLayer::x_request_id(
            request_id::MakeRequestUuidV7,
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors::cors_layer())
        .with_state(state)
}
