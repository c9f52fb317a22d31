//! Signup validation

use chrono::NaiveDate;
use shared::models::MemberCreate;

use super::MembershipError;
use super::profile::{normalize_trainer, required_text};

/// A validated signup, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub phone: String,
    pub payment_date: NaiveDate,
    pub duration_months: u32,
    pub trainer: Option<String>,
    pub image_url: Option<String>,
}

impl NewMember {
    /// Validate a signup payload. Required: name, phone, paymentDate, durationMonths.
    pub fn parse(payload: MemberCreate) -> Result<Self, MembershipError> {
        let name = required_text(payload.name, "name")?;
        let phone = required_text(payload.phone, "phone")?;
        let payment_date = parse_payment_date(
            &required_text(payload.payment_date, "paymentDate")?,
        )?;
        let duration_months = validate_duration(
            payload
                .duration_months
                .ok_or(MembershipError::MissingField("durationMonths"))?,
        )?;

        Ok(Self {
            name,
            phone,
            payment_date,
            duration_months,
            trainer: normalize_trainer(payload.trainer),
            image_url: payload
                .image_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
        })
    }
}

/// A plan length must be a whole number of months, at least one.
pub fn validate_duration(months: i64) -> Result<u32, MembershipError> {
    u32::try_from(months)
        .ok()
        .filter(|m| *m >= 1)
        .ok_or(MembershipError::InvalidDuration(months))
}

/// Parse a `YYYY-MM-DD` payment date.
pub fn parse_payment_date(value: &str) -> Result<NaiveDate, MembershipError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| MembershipError::InvalidPaymentDate(value.to_string()))
}
