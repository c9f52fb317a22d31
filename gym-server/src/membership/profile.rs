//! Profile edit (name, phone, trainer)

use shared::models::{Member, MemberUpdate};

use super::MembershipError;

/// Sentinel sent by the dashboard's trainer picker for "none selected".
pub const NO_TRAINER_SENTINEL: &str = "None";

/// A validated profile edit. Billing fields are not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEdit {
    pub name: String,
    pub phone: String,
    pub trainer: Option<String>,
}

impl ProfileEdit {
    /// Validate an update payload: `name` and `phone` must be non-blank.
    pub fn parse(update: MemberUpdate) -> Result<Self, MembershipError> {
        Ok(Self {
            name: required_text(update.name, "name")?,
            phone: required_text(update.phone, "phone")?,
            trainer: normalize_trainer(update.trainer),
        })
    }
}

/// Apply a validated edit. Replaces name, phone and trainer; leaves billing alone.
pub fn edit_profile(member: Member, edit: &ProfileEdit) -> Member {
    Member {
        name: edit.name.clone(),
        phone: edit.phone.clone(),
        trainer: edit.trainer.clone(),
        ..member
    }
}

/// Map "no trainer" spellings (`null`, blank, `"None"`) to `None`.
pub fn normalize_trainer(trainer: Option<String>) -> Option<String> {
    trainer
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case(NO_TRAINER_SENTINEL))
}

pub(crate) fn required_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, MembershipError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(MembershipError::MissingField(field))
}
