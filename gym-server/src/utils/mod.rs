//! Utilities
//!
//! - [`logger`] - tracing subscriber set-up
//! - [`validation`] - text length and trainer checks

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
