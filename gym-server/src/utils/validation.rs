//! Input validation helpers
//!
//! Text length limits for member fields. SQLite TEXT has no built-in length
//! enforcement, so handlers check before writing.

use shared::error::{AppError, ErrorCode};

use crate::core::Config;

/// Member names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers and trainer labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Photo URLs
pub const MAX_URL_LEN: usize = 2048;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({len} chars, max {max_len})"
            )));
        }
    }
    Ok(())
}

/// Validate a normalized trainer label against the configured roster.
pub fn validate_trainer(config: &Config, trainer: Option<&str>) -> Result<(), AppError> {
    validate_optional_text(trainer, "trainer", MAX_SHORT_TEXT_LEN)?;
    if !config.trainer_allowed(trainer) {
        let name = trainer.unwrap_or_default();
        return Err(AppError::with_message(
            ErrorCode::TrainerNotAllowed,
            format!("Unknown trainer {name:?}"),
        )
        .with_detail("trainer", name.to_string()));
    }
    Ok(())
}
