//! # echonote-db
//!
//! PostgreSQL database layer for echonote.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for users, notes, and legacy transcripts
//!
//! ## Example
//!
//! ```rust,ignore
//! use echonote_db::Database;
//! use echonote_core::{SaveNoteRequest, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/echonote").await?;
//!
//!     let note = db.notes.save(SaveNoteRequest {
//!         user_id: uuid::Uuid::now_v7(),
//!         note_id: "note-1".to_string(),
//!         title: "Standup".to_string(),
//!         note_text: "Discussed roadmap".to_string(),
//!         cur_transcript: "we talked about the roadmap".to_string(),
//!         cur_summary: "roadmap discussion".to_string(),
//!     }).await?;
//!
//!     println!("Saved note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;
pub mod transcripts;
pub mod users;

#[cfg(test)]
mod tests;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use echonote_core::*;

// Re-export repository implementations
pub use notes::PgNoteRepository;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use transcripts::PgTranscriptRepository;
pub use users::PgUserRepository;

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// User repository for account storage and lookup.
    pub users: PgUserRepository,
    /// Note repository for note storage.
    pub notes: PgNoteRepository,
    /// Legacy transcript repository.
    pub transcripts: PgTranscriptRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            notes: PgNoteRepository::new(pool.clone()),
            transcripts: PgTranscriptRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}
