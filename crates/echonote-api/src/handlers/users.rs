//! User listing and lookup handlers.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use echonote_core::UserPublic;

use crate::{ApiError, AppState};

/// List all users.
///
/// # Returns
/// - 200 OK with the full user list (passwords stripped)
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.list().await?;
    let users: Vec<UserPublic> = users.iter().map(|u| u.public()).collect();

    info!(
        subsystem = "api",
        op = "list_users",
        result_count = users.len(),
        "Listed users"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "users": users,
    })))
}

/// Get a specific user by id.
///
/// # Returns
/// - 200 OK with the user projection (password stripped)
/// - 404 Not Found for an unknown id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "user": user.public(),
    })))
}
