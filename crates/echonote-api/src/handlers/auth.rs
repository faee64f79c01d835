//! Login and registration handlers.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::info;

use echonote_core::{hash_password, verify_password, CreateUserRequest};

use crate::{ApiError, AppState};

/// Login request body. Fields are optional at the wire level; absent
/// credentials fail the same way as wrong ones.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration request body. `lastName` is optional; the remaining fields
/// are validated before any repository call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Required-field validation: firstName, email, and password must be
    /// present and non-empty.
    fn validate(self) -> Result<(String, String, String, String), ApiError> {
        let first_name = self.first_name.unwrap_or_default();
        let last_name = self.last_name.unwrap_or_default();
        let email = self.email.unwrap_or_default();
        let password = self.password.unwrap_or_default();

        if first_name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ApiError::BadRequest("Missing required fields".to_string()));
        }

        Ok((first_name, last_name, email, password))
    }
}

/// Authenticate a user by email and password.
///
/// # Returns
/// - 200 OK with the user projection (password stripped)
/// - 401 Unauthorized for unknown email, wrong password, or absent fields
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    info!(subsystem = "api", op = "login", email = %email, "Login attempt");

    let user = state.users.find_by_email(&email).await?;

    // Unknown email and wrong password are indistinguishable to the caller.
    let authenticated = user.filter(|u| verify_password(&password, &u.password_hash));

    match authenticated {
        Some(user) => Ok(Json(serde_json::json!({
            "success": true,
            "message": "Login successful",
            "user": user.public(),
        }))),
        None => Err(ApiError::Unauthorized("Invalid credentials".to_string())),
    }
}

/// Register a new user.
///
/// # Returns
/// - 200 OK with the created user projection (password stripped)
/// - 400 Bad Request if firstName/email/password are missing or the email
///   is already registered
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (first_name, last_name, email, password) = req.validate()?;

    info!(subsystem = "api", op = "register", email = %email, "Registration attempt");

    let password_hash = hash_password(&password)?;
    let user = state
        .users
        .insert(CreateUserRequest {
            first_name,
            last_name,
            email,
            password_hash,
        })
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Registration successful",
        "user": user.public(),
    })))
}
