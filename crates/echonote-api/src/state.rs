//! Application state shared across handlers.

use std::sync::Arc;

use echonote_core::{NoteRepository, TranscriptRepository, UserRepository};
use echonote_db::Database;

/// Application state shared across handlers.
///
/// Repositories are held as trait objects so tests can exercise the router
/// against in-memory stubs; production wiring goes through
/// [`AppState::from_database`].
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub notes: Arc<dyn NoteRepository>,
    pub transcripts: Arc<dyn TranscriptRepository>,
}

impl AppState {
    /// Build state from explicit repository implementations.
    pub fn new(
        users: Arc<dyn UserRepository>,
        notes: Arc<dyn NoteRepository>,
        transcripts: Arc<dyn TranscriptRepository>,
    ) -> Self {
        Self {
            users,
            notes,
            transcripts,
        }
    }

    /// Build state backed by the PostgreSQL repositories.
    pub fn from_database(db: Database) -> Self {
        Self {
            users: Arc::new(db.users),
            notes: Arc::new(db.notes),
            transcripts: Arc::new(db.transcripts),
        }
    }
}
