//! Shared types for the gym membership service
//!
//! Wire models, the unified error system and small utilities used by
//! `gym-server` and its clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
