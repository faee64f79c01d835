//! Handler modules for echonote-api.

pub mod auth;
pub mod notes;
pub mod system;
pub mod transcripts;
pub mod users;
