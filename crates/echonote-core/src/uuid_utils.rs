//! UUID v7 utilities for time-ordered identifiers.
//!
//! Primary keys use UUIDv7, which embeds a millisecond-precision Unix
//! timestamp in the first 48 bits, so ids generated later sort
//! lexicographically greater and index inserts stay append-mostly.

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
///
/// # Example
///
/// ```
/// use echonote_core::uuid_utils::new_v7;
///
/// let id = new_v7();
/// ```
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}
