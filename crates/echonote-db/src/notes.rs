//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use uuid::Uuid;

use echonote_core::{new_v7, Error, Note, NoteRepository, Result, SaveNoteRequest};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn map_row_to_note(row: PgRow) -> Note {
    Note {
        id: row.get("id"),
        user_id: row.get("user_id"),
        note_id: row.get("note_id"),
        title: row.get("title"),
        note_text: row.get("note_text"),
        cur_transcript: row.get("cur_transcript"),
        cur_summary: row.get("cur_summary"),
        created_at_utc: row.get("created_at_utc"),
        updated_at_utc: row.get("updated_at_utc"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn save(&self, req: SaveNoteRequest) -> Result<Note> {
        let id = new_v7();
        let now = Utc::now();

        // Upsert keyed on (user_id, note_id): a repeated save overwrites the
        // stored contents while created_at_utc keeps the first-save time.
        let row = sqlx::query(
            r#"INSERT INTO note (id, user_id, note_id, title, note_text,
                                 cur_transcript, cur_summary,
                                 created_at_utc, updated_at_utc)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
               ON CONFLICT (user_id, note_id) DO UPDATE SET
                   title = EXCLUDED.title,
                   note_text = EXCLUDED.note_text,
                   cur_transcript = EXCLUDED.cur_transcript,
                   cur_summary = EXCLUDED.cur_summary,
                   updated_at_utc = EXCLUDED.updated_at_utc
               RETURNING id, user_id, note_id, title, note_text,
                         cur_transcript, cur_summary,
                         created_at_utc, updated_at_utc"#,
        )
        .bind(id)
        .bind(req.user_id)
        .bind(&req.note_id)
        .bind(&req.title)
        .bind(&req.note_text)
        .bind(&req.cur_transcript)
        .bind(&req.cur_summary)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(map_row_to_note(row))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, note_id, title, note_text,
                      cur_transcript, cur_summary,
                      created_at_utc, updated_at_utc
               FROM note
               WHERE user_id = $1
               ORDER BY updated_at_utc DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_note).collect())
    }
}
