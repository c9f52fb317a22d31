//! Unified error codes for the gym service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Membership errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Request body is not valid JSON for the endpoint
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Membership ====================
    /// Member does not exist
    MemberNotFound = 4001,
    /// Duration in months is missing or below one
    InvalidDuration = 4002,
    /// Payment date is not a valid YYYY-MM-DD date
    InvalidPaymentDate = 4003,
    /// Trainer label is not on the configured roster
    TrainerNotAllowed = 4004,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Membership
            ErrorCode::MemberNotFound => "Member not found",
            ErrorCode::InvalidDuration => "Duration must be at least one month",
            ErrorCode::InvalidPaymentDate => "Payment date must be formatted YYYY-MM-DD",
            ErrorCode::TrainerNotAllowed => "Trainer is not on the roster",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Membership
            4001 => Ok(ErrorCode::MemberNotFound),
            4002 => Ok(ErrorCode::InvalidDuration),
            4003 => Ok(ErrorCode::InvalidPaymentDate),
            4004 => Ok(ErrorCode::TrainerNotAllowed),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
