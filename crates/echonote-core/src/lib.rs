//! # echonote-core
//!
//! Core types, traits, and abstractions for the echonote backend.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other echonote crates depend on.

pub mod error;
pub mod logging;
pub mod models;
pub mod password;
pub mod traits;
pub mod uuid_utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use password::{hash_password, verify_password};
pub use traits::*;
pub use uuid_utils::new_v7;
