//! Database integration tests.
//!
//! These run against a live PostgreSQL instance (see `test_fixtures`) and
//! are gated behind `#[ignore]`; run them with `cargo test -- --ignored`
//! once the schema from `migrations/` is applied.
