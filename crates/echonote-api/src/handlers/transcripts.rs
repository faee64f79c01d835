//! Legacy transcript handlers, superseded by the note endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use echonote_core::CreateTranscriptRequest;

use crate::{ApiError, AppState};

/// Save-transcript request body. Every field is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTranscriptBody {
    pub user_id: Option<Uuid>,
    pub original_text: Option<String>,
    pub title: Option<String>,
}

impl SaveTranscriptBody {
    fn validate(self) -> Result<CreateTranscriptRequest, ApiError> {
        match (self.user_id, self.original_text, self.title) {
            (Some(user_id), Some(original_text), Some(title)) => Ok(CreateTranscriptRequest {
                user_id,
                original_text,
                title,
            }),
            _ => Err(ApiError::BadRequest("Missing required fields".to_string())),
        }
    }
}

/// Append a transcript record.
///
/// # Returns
/// - 200 OK with the saved transcript
/// - 400 Bad Request if any required field is absent
/// - 500 Internal Server Error if persistence fails
pub async fn save_transcript(
    State(state): State<AppState>,
    Json(body): Json<SaveTranscriptBody>,
) -> Result<impl IntoResponse, ApiError> {
    let req = body.validate()?;

    info!(
        subsystem = "api",
        op = "save_transcript",
        user_id = %req.user_id,
        "Saving transcript"
    );

    let transcript = state.transcripts.insert(req).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Transcript saved successfully",
        "transcript": transcript,
    })))
}

/// Get all transcripts for a user.
///
/// # Returns
/// - 200 OK with the user's transcripts, newest first
/// - 500 Internal Server Error if persistence fails
pub async fn get_user_transcripts(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    info!(
        subsystem = "api",
        op = "get_user_transcripts",
        user_id = %user_id,
        "Retrieving transcripts"
    );

    let transcripts = state.transcripts.list_for_user(user_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "transcripts": transcripts,
    })))
}
