//! Core traits for echonote abstractions.
//!
//! These traits define the persistence interfaces that concrete
//! implementations must satisfy, enabling pluggable backends and
//! testability with in-memory stubs.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// USER REPOSITORY
// =============================================================================

/// Request for creating a new user. `password_hash` is the Argon2id PHC
/// string; hashing happens before the repository boundary.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `Error::InvalidInput` if the email is
    /// already registered.
    async fn insert(&self, req: CreateUserRequest) -> Result<User>;

    /// Fetch a user by email (the login key). Returns `None` if unknown.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Fetch a user by id.
    async fn fetch(&self, id: Uuid) -> Result<Option<User>>;

    /// List all users.
    async fn list(&self) -> Result<Vec<User>>;
}

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Request for saving a note. Saving with an existing `(user_id, note_id)`
/// pair overwrites the stored contents.
#[derive(Debug, Clone)]
pub struct SaveNoteRequest {
    pub user_id: Uuid,
    pub note_id: String,
    pub title: String,
    pub note_text: String,
    pub cur_transcript: String,
    pub cur_summary: String,
}

/// Repository for note storage.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert or overwrite a note, keyed on `(user_id, note_id)`.
    async fn save(&self, req: SaveNoteRequest) -> Result<Note>;

    /// List all notes owned by a user, most recently updated first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Note>>;
}

// =============================================================================
// TRANSCRIPT REPOSITORY (legacy)
// =============================================================================

/// Request for appending a legacy transcript.
#[derive(Debug, Clone)]
pub struct CreateTranscriptRequest {
    pub user_id: Uuid,
    pub original_text: String,
    pub title: String,
}

/// Repository for legacy transcript storage. Append-only.
#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    /// Append a transcript record.
    async fn insert(&self, req: CreateTranscriptRequest) -> Result<Transcript>;

    /// List all transcripts owned by a user, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Transcript>>;
}
