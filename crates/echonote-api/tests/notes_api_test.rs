//! Router-level tests for the note save/retrieve endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{
    get_json, post_json, stub_state, FailingNoteRepository, StubTranscriptRepository,
    StubUserRepository,
};
use echonote_api::{app, AppState};

fn note_body(user_id: Uuid) -> serde_json::Value {
    json!({
        "userId": user_id.to_string(),
        "noteId": "note-1",
        "title": "Standup",
        "noteText": "Discussed roadmap",
        "curTranscript": "we talked about the roadmap",
        "curSummary": "roadmap discussion"
    })
}

#[tokio::test]
async fn test_save_note_success() {
    let user_id = Uuid::now_v7();
    let (status, body) = post_json(app(stub_state()), "/userdata", note_body(user_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("User data saved successfully"));
    assert_eq!(body["note"]["noteId"], json!("note-1"));
    assert_eq!(body["note"]["userId"], json!(user_id.to_string()));
}

#[tokio::test]
async fn test_save_note_missing_cur_summary_returns_400() {
    let mut body = note_body(Uuid::now_v7());
    body.as_object_mut().unwrap().remove("curSummary");

    let (status, response) = post_json(app(stub_state()), "/userdata", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], json!(false));
    assert_eq!(response["message"], json!("Missing required fields"));
}

#[tokio::test]
async fn test_save_note_missing_user_id_returns_400() {
    let mut body = note_body(Uuid::now_v7());
    body.as_object_mut().unwrap().remove("userId");

    let (status, response) = post_json(app(stub_state()), "/userdata", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], json!(false));
}

#[tokio::test]
async fn test_save_note_twice_overwrites() {
    let state = stub_state();
    let user_id = Uuid::now_v7();

    let (status, _) = post_json(app(state.clone()), "/userdata", note_body(user_id)).await;
    assert_eq!(status, StatusCode::OK);

    let mut updated = note_body(user_id);
    updated["title"] = json!("Standup (final)");
    let (status, _) = post_json(app(state.clone()), "/userdata", updated).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(app(state), &format!("/userdata/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);
    let notes = body["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], json!("Standup (final)"));
}

#[tokio::test]
async fn test_get_notes_only_for_requested_user() {
    let state = stub_state();
    let owner = Uuid::now_v7();
    let other = Uuid::now_v7();

    post_json(app(state.clone()), "/userdata", note_body(owner)).await;
    post_json(app(state.clone()), "/userdata", note_body(other)).await;

    let (status, body) = get_json(app(state), &format!("/userdata/{}", owner)).await;

    assert_eq!(status, StatusCode::OK);
    let notes = body["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["userId"], json!(owner.to_string()));
}

#[tokio::test]
async fn test_save_note_persistence_failure_returns_500() {
    let state = AppState::new(
        Arc::new(StubUserRepository::default()),
        Arc::new(FailingNoteRepository),
        Arc::new(StubTranscriptRepository::default()),
    );

    let (status, body) = post_json(app(state), "/userdata", note_body(Uuid::now_v7())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_get_notes_persistence_failure_returns_500() {
    let state = AppState::new(
        Arc::new(StubUserRepository::default()),
        Arc::new(FailingNoteRepository),
        Arc::new(StubTranscriptRepository::default()),
    );

    let (status, body) = get_json(app(state), &format!("/userdata/{}", Uuid::now_v7())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
}
