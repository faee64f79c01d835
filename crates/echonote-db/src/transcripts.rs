//! Legacy transcript repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use uuid::Uuid;

use echonote_core::{
    new_v7, CreateTranscriptRequest, Error, Result, Transcript, TranscriptRepository,
};

/// PostgreSQL implementation of TranscriptRepository.
#[derive(Clone)]
pub struct PgTranscriptRepository {
    pool: Pool<Postgres>,
}

impl PgTranscriptRepository {
    /// Create a new PgTranscriptRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn map_row_to_transcript(row: PgRow) -> Transcript {
    Transcript {
        id: row.get("id"),
        user_id: row.get("user_id"),
        original_text: row.get("original_text"),
        title: row.get("title"),
        created_at_utc: row.get("created_at_utc"),
    }
}

#[async_trait]
impl TranscriptRepository for PgTranscriptRepository {
    async fn insert(&self, req: CreateTranscriptRequest) -> Result<Transcript> {
        let id = new_v7();
        let now = Utc::now();

        let row = sqlx::query(
            r#"INSERT INTO transcript (id, user_id, original_text, title, created_at_utc)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, user_id, original_text, title, created_at_utc"#,
        )
        .bind(id)
        .bind(req.user_id)
        .bind(&req.original_text)
        .bind(&req.title)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(map_row_to_transcript(row))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Transcript>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, original_text, title, created_at_utc
               FROM transcript
               WHERE user_id = $1
               ORDER BY created_at_utc DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_transcript).collect())
    }
}
