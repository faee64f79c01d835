//! Core data models for echonote.
//!
//! These types are shared across all echonote crates and represent
//! the core domain entities. Wire-facing types serialize with camelCase
//! field names to match the JSON contract of the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// USER TYPES
// =============================================================================

/// Full user record as stored in the database.
///
/// Carries the Argon2id password hash and therefore never derives
/// `Serialize`; API responses use the [`UserPublic`] projection instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at_utc: DateTime<Utc>,
}

impl User {
    /// Client-safe projection with the password hash stripped.
    pub fn public(&self) -> UserPublic {
        UserPublic {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Client-safe user projection (no password material).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A saved note with its current transcript and summary.
///
/// `note_id` is the client-chosen note key; saving again with the same
/// `(user_id, note_id)` pair overwrites the previous contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub note_id: String,
    pub title: String,
    pub note_text: String,
    pub cur_transcript: String,
    pub cur_summary: String,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

// =============================================================================
// TRANSCRIPT TYPES (legacy)
// =============================================================================

/// A legacy transcript record. Append-only; superseded by [`Note`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub id: Uuid,
    pub user_id: Uuid,
    pub original_text: String,
    pub title: String,
    pub created_at_utc: DateTime<Utc>,
}
