//! Subscription lifecycle - pure functions, no I/O
//!
//! - [`calendar`] - calendar-month addition and expiry instants
//! - [`status`] - Active / Expiring Soon / Expired classification
//! - [`renewal`] - stack onto a running period or restart a lapsed one
//! - [`profile`] - name / phone / trainer edits
//! - [`signup`] - signup validation
//! - [`roster`] - search filter and aggregate stats
//! - [`receipt`] - signup receipt and WhatsApp link
//!
//! Nothing in here logs or touches the database; callers pass `now` in.

pub mod calendar;
pub mod profile;
pub mod receipt;
pub mod renewal;
pub mod roster;
pub mod signup;
pub mod status;

pub use calendar::{add_calendar_months, expiry_date};
pub use profile::{ProfileEdit, edit_profile, normalize_trainer};
pub use receipt::{receipt_message, whatsapp_link};
pub use renewal::renew;
pub use roster::{dashboard, filter_roster, roster_stats, with_status};
pub use signup::{NewMember, validate_duration};
pub use status::classify;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by membership rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("durationMonths must be a whole number of months, at least 1 (got {0})")]
    InvalidDuration(i64),

    #[error("paymentDate must be formatted YYYY-MM-DD (got {0:?})")]
    InvalidPaymentDate(String),
}

impl From<MembershipError> for AppError {
    fn from(err: MembershipError) -> Self {
        match err {
            MembershipError::MissingField(field) => AppError::required_field(field),
            MembershipError::InvalidDuration(months) => {
                AppError::with_message(ErrorCode::InvalidDuration, err.to_string())
                    .with_detail("durationMonths", months)
            }
            MembershipError::InvalidPaymentDate(ref value) => {
                AppError::with_message(ErrorCode::InvalidPaymentDate, err.to_string())
                    .with_detail("paymentDate", value.clone())
            }
        }
    }
}
