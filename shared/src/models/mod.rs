//! Data models
//!
//! Shared between gym-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod member;
pub mod serde_helpers;

// Re-exports
pub use member::*;
