//! Note save and retrieval handlers.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use echonote_core::SaveNoteRequest;

use crate::{ApiError, AppState};

/// Save-note request body. Every field is required; validation happens
/// before the repository call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveNoteBody {
    pub user_id: Option<Uuid>,
    pub note_id: Option<String>,
    pub title: Option<String>,
    pub note_text: Option<String>,
    pub cur_transcript: Option<String>,
    pub cur_summary: Option<String>,
}

impl SaveNoteBody {
    fn validate(self) -> Result<SaveNoteRequest, ApiError> {
        match (
            self.user_id,
            self.note_id,
            self.title,
            self.note_text,
            self.cur_transcript,
            self.cur_summary,
        ) {
            (
                Some(user_id),
                Some(note_id),
                Some(title),
                Some(note_text),
                Some(cur_transcript),
                Some(cur_summary),
            ) => Ok(SaveNoteRequest {
                user_id,
                note_id,
                title,
                note_text,
                cur_transcript,
                cur_summary,
            }),
            _ => Err(ApiError::BadRequest("Missing required fields".to_string())),
        }
    }
}

/// Save (insert or overwrite) a note.
///
/// # Returns
/// - 200 OK with the saved note
/// - 400 Bad Request if any required field is absent
/// - 500 Internal Server Error if persistence fails
pub async fn save_note(
    State(state): State<AppState>,
    Json(body): Json<SaveNoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    let req = body.validate()?;

    info!(
        subsystem = "api",
        op = "save_note",
        user_id = %req.user_id,
        note_id = %req.note_id,
        "Saving user data"
    );

    let note = state.notes.save(req).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "User data saved successfully",
        "note": note,
    })))
}

/// Get all notes for a user.
///
/// # Returns
/// - 200 OK with the user's notes, most recently updated first
/// - 500 Internal Server Error if persistence fails
pub async fn get_user_notes(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    info!(
        subsystem = "api",
        op = "get_user_notes",
        user_id = %user_id,
        "Retrieving user data"
    );

    let notes = state.notes.list_for_user(user_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "notes": notes,
    })))
}
