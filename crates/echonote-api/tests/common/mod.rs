//! Shared test support: in-memory stub repositories and request helpers.
//!
//! The stubs implement the `echonote_core` repository traits over plain
//! vectors so router-level tests can run without a database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use tower::ServiceExt;
use uuid::Uuid;

use echonote_api::AppState;
use echonote_core::{
    hash_password, new_v7, CreateTranscriptRequest, CreateUserRequest, Error, Note,
    NoteRepository, Result, SaveNoteRequest, Transcript, TranscriptRepository, User,
    UserRepository,
};

// =============================================================================
// STUB REPOSITORIES
// =============================================================================

#[derive(Default)]
pub struct StubUserRepository {
    users: Mutex<Vec<User>>,
}

impl StubUserRepository {
    pub fn seeded(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn insert(&self, req: CreateUserRequest) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == req.email) {
            return Err(Error::InvalidInput("Email already registered".to_string()));
        }
        let user = User {
            id: new_v7(),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password_hash: req.password_hash,
            created_at_utc: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct StubNoteRepository {
    notes: Mutex<Vec<Note>>,
}

#[async_trait]
impl NoteRepository for StubNoteRepository {
    async fn save(&self, req: SaveNoteRequest) -> Result<Note> {
        let mut notes = self.notes.lock().unwrap();
        let now = Utc::now();
        if let Some(existing) = notes
            .iter_mut()
            .find(|n| n.user_id == req.user_id && n.note_id == req.note_id)
        {
            existing.title = req.title;
            existing.note_text = req.note_text;
            existing.cur_transcript = req.cur_transcript;
            existing.cur_summary = req.cur_summary;
            existing.updated_at_utc = now;
            return Ok(existing.clone());
        }
        let note = Note {
            id: new_v7(),
            user_id: req.user_id,
            note_id: req.note_id,
            title: req.title,
            note_text: req.note_text,
            cur_transcript: req.cur_transcript,
            cur_summary: req.cur_summary,
            created_at_utc: now,
            updated_at_utc: now,
        };
        notes.push(note.clone());
        Ok(note)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Note>> {
        let notes = self.notes.lock().unwrap();
        Ok(notes
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct StubTranscriptRepository {
    transcripts: Mutex<Vec<Transcript>>,
}

#[async_trait]
impl TranscriptRepository for StubTranscriptRepository {
    async fn insert(&self, req: CreateTranscriptRequest) -> Result<Transcript> {
        let mut transcripts = self.transcripts.lock().unwrap();
        let transcript = Transcript {
            id: new_v7(),
            user_id: req.user_id,
            original_text: req.original_text,
            title: req.title,
            created_at_utc: Utc::now(),
        };
        // Newest first, matching the repository contract
        transcripts.insert(0, transcript.clone());
        Ok(transcript)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Transcript>> {
        let transcripts = self.transcripts.lock().unwrap();
        Ok(transcripts
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// Note repository whose every operation fails, for 500-path tests.
pub struct FailingNoteRepository;

#[async_trait]
impl NoteRepository for FailingNoteRepository {
    async fn save(&self, _req: SaveNoteRequest) -> Result<Note> {
        Err(Error::Internal("storage offline".to_string()))
    }

    async fn list_for_user(&self, _user_id: Uuid) -> Result<Vec<Note>> {
        Err(Error::Internal("storage offline".to_string()))
    }
}

/// Transcript repository whose every operation fails, for 500-path tests.
pub struct FailingTranscriptRepository;

#[async_trait]
impl TranscriptRepository for FailingTranscriptRepository {
    async fn insert(&self, _req: CreateTranscriptRequest) -> Result<Transcript> {
        Err(Error::Internal("storage offline".to_string()))
    }

    async fn list_for_user(&self, _user_id: Uuid) -> Result<Vec<Transcript>> {
        Err(Error::Internal("storage offline".to_string()))
    }
}

// =============================================================================
// STATE AND USER BUILDERS
// =============================================================================

/// State over empty stub repositories.
pub fn stub_state() -> AppState {
    AppState::new(
        Arc::new(StubUserRepository::default()),
        Arc::new(StubNoteRepository::default()),
        Arc::new(StubTranscriptRepository::default()),
    )
}

/// State with pre-seeded users and empty note/transcript stores.
pub fn state_with_users(users: Vec<User>) -> AppState {
    AppState::new(
        Arc::new(StubUserRepository::seeded(users)),
        Arc::new(StubNoteRepository::default()),
        Arc::new(StubTranscriptRepository::default()),
    )
}

/// A user whose password hash matches `password`.
pub fn seeded_user(email: &str, password: &str) -> User {
    User {
        id: new_v7(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: hash_password(password).unwrap(),
        created_at_utc: Utc::now(),
    }
}

// =============================================================================
// REQUEST HELPERS
// =============================================================================

/// POST a JSON body and return (status, parsed JSON response).
pub async fn post_json(
    router: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

/// GET a path and return (status, parsed JSON response).
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
