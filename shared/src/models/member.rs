//! Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::flexible_int;

/// Member entity (gym subscriber)
///
/// Expiry is never stored: it is always `payment_date + duration_months`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub phone: String,
    /// Start of the currently active billing period
    pub payment_date: NaiveDate,
    /// Length of the active period; accumulates across stacked renewals
    pub duration_months: u32,
    pub trainer: Option<String>,
    pub image_url: Option<String>,
    /// Unix millis
    pub created_at: i64,
}

/// Create member payload (signup)
///
/// Every field is optional at the wire level so missing fields surface as
/// validation errors naming the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// `YYYY-MM-DD`
    pub payment_date: Option<String>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub duration_months: Option<i64>,
    pub trainer: Option<String>,
    pub image_url: Option<String>,
}

/// Update member payload (non-billing fields only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// `null` or `"None"` clears the trainer
    pub trainer: Option<String>,
}

/// Renew member payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRenew {
    #[serde(default, deserialize_with = "flexible_int")]
    pub duration_months: Option<i64>,
}

/// Subscription status, derived at query time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// More than three days remaining
    Active,
    /// Zero to three days remaining
    ExpiringSoon,
    /// Past expiry
    Expired,
}

impl MemberStatus {
    /// Display label used by the admin dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::ExpiringSoon => "Expiring Soon",
            Self::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Status classification of one membership at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub status: MemberStatus,
    /// Whole days until expiry, rounded up; negative once lapsed
    pub days_remaining: i64,
    pub expires_on: NaiveDate,
}

/// Member annotated with its computed status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithStatus {
    #[serde(flatten)]
    pub member: Member,
    pub status: StatusSummary,
}

/// Partition counts over a (filtered) roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

/// Admin dashboard view: filtered roster plus stats over it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDashboard {
    pub members: Vec<MemberWithStatus>,
    pub stats: RosterStats,
}

/// New billing fields produced by a renewal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalOutcome {
    pub payment_date: NaiveDate,
    pub duration_months: u32,
    pub expires_on: NaiveDate,
    /// True when the membership had lapsed and the period restarted today
    pub restarted: bool,
}

/// Response for `POST /api/members`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreated {
    pub success: bool,
    pub id: i64,
}

/// Response for `PUT /api/members/{id}/renew`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRenewed {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: RenewalOutcome,
}

/// Plain success indicator for mutations without a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub const OK: Ack = Ack { success: true };
}

/// Receipt message and click-to-chat link for a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberReceipt {
    pub message: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Member {
        Member {
            id: 1,
            name: "Asha".into(),
            phone: "9876543210".into(),
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            duration_months: 3,
            trainer: None,
            image_url: None,
            created_at: 1_704_067_200_000,
        }
    }

    #[test]
    fn member_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["paymentDate"], "2024-01-01");
        assert_eq!(json["durationMonths"], 3);
        assert!(json["trainer"].is_null());
        assert_eq!(json["createdAt"], 1_704_067_200_000_i64);
    }

    #[test]
    fn create_payload_accepts_string_duration() {
        let payload: MemberCreate = serde_json::from_str(
            r#"{"name":"Asha","phone":"98765","paymentDate":"2024-01-01","durationMonths":"6"}"#,
        )
        .unwrap();
        assert_eq!(payload.duration_months, Some(6));
        assert!(payload.trainer.is_none());
    }

    #[test]
    fn member_with_status_flattens() {
        let row = MemberWithStatus {
            member: sample(),
            status: StatusSummary {
                status: MemberStatus::ExpiringSoon,
                days_remaining: 2,
                expires_on: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            },
        };
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["status"]["status"], "expiring_soon");
        assert_eq!(json["status"]["daysRemaining"], 2);
        assert_eq!(json["status"]["expiresOn"], "2024-04-01");
    }

    #[test]
    fn status_labels() {
        assert_eq!(MemberStatus::Active.label(), "Active");
        assert_eq!(MemberStatus::ExpiringSoon.to_string(), "Expiring Soon");
        assert_eq!(MemberStatus::Expired.label(), "Expired");
    }
}
