//! Renewal
//!
//! A renewal either stacks onto a running period (start date kept, months
//! summed) or, once the period has lapsed, restarts the clock from today.
//! Leftover time from a lapsed period is discarded.

use chrono::{DateTime, Utc};
use shared::models::{Member, RenewalOutcome};

use super::MembershipError;
use super::calendar::{expiry_date, expiry_instant};

/// Compute the billing fields that replace `member`'s after adding `added_months`.
pub fn renew(
    member: &Member,
    added_months: u32,
    now: DateTime<Utc>,
) -> Result<RenewalOutcome, MembershipError> {
    if added_months == 0 {
        return Err(MembershipError::InvalidDuration(0));
    }

    let current_expiry = expiry_instant(expiry_date(member.payment_date, member.duration_months));

    let (payment_date, duration_months, restarted) = if current_expiry < now {
        (now.date_naive(), added_months, true)
    } else {
        let total = member
            .duration_months
            .checked_add(added_months)
            .ok_or(MembershipError::InvalidDuration(i64::from(added_months)))?;
        (member.payment_date, total, false)
    };

    Ok(RenewalOutcome {
        payment_date,
        duration_months,
        expires_on: expiry_date(payment_date, duration_months),
        restarted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn member(payment_date: NaiveDate, duration_months: u32) -> Member {
        Member {
            id: 1,
            name: "Ravi".into(),
            phone: "9000000000".into(),
            payment_date,
            duration_months,
            trainer: Some("Owais".into()),
            image_url: None,
            created_at: 0,
        }
    }

    #[test]
    fn active_member_keeps_start_and_sums_months() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let outcome = renew(&member(d(2024, 1, 1), 1), 3, now).unwrap();

        assert_eq!(outcome.payment_date, d(2024, 1, 1));
        assert_eq!(outcome.duration_months, 4);
        assert_eq!(outcome.expires_on, d(2024, 5, 1));
        assert!(!outcome.restarted);
    }

    #[test]
    fn expired_member_restarts_from_today() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let outcome = renew(&member(d(2023, 1, 1), 1), 1, now).unwrap();

        assert_eq!(outcome.payment_date, d(2024, 6, 1));
        assert_eq!(outcome.duration_months, 1);
        assert_eq!(outcome.expires_on, d(2024, 7, 1));
        assert!(outcome.restarted);
    }

    #[test]
    fn restart_uses_utc_date_of_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 23, 45, 0).unwrap();
        let outcome = renew(&member(d(2023, 1, 1), 1), 6, now).unwrap();
        assert_eq!(outcome.payment_date, d(2024, 6, 1));
        assert_eq!(outcome.duration_months, 6);
    }

    #[test]
    fn expiring_soon_member_still_stacks() {
        // expires 2024-02-01T00:00Z, two days left
        let now = Utc.with_ymd_and_hms(2024, 1, 30, 0, 0, 0).unwrap();
        let outcome = renew(&member(d(2024, 1, 1), 1), 1, now).unwrap();
        assert_eq!(outcome.payment_date, d(2024, 1, 1));
        assert_eq!(outcome.duration_months, 2);
        assert!(!outcome.restarted);
    }

    #[test]
    fn renewing_exactly_at_expiry_stacks() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let outcome = renew(&member(d(2024, 1, 1), 1), 1, now).unwrap();
        assert!(!outcome.restarted);
        assert_eq!(outcome.duration_months, 2);
    }

    #[test]
    fn one_second_past_expiry_restarts() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 1).unwrap();
        let outcome = renew(&member(d(2024, 1, 1), 1), 1, now).unwrap();
        assert!(outcome.restarted);
        assert_eq!(outcome.payment_date, d(2024, 2, 1));
    }

    #[test]
    fn zero_months_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(
            renew(&member(d(2024, 1, 1), 1), 0, now),
            Err(MembershipError::InvalidDuration(0))
        );
    }

    #[test]
    fn overflowing_sum_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let result = renew(&member(d(2024, 1, 1), u32::MAX), 1, now);
        assert!(matches!(result, Err(MembershipError::InvalidDuration(1))));
    }
}
