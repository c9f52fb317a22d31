//! Status classification

use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{MemberStatus, StatusSummary};

use super::calendar::{expiry_date, expiry_instant};

/// Upper bound (inclusive) of the "Expiring Soon" tier, in days.
pub const EXPIRING_SOON_DAYS: i64 = 3;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Classify a membership at `now`.
///
/// `days_remaining` is `ceil((expiry - now) / 1 day)`, so a membership that
/// lapses later today reads 0, and one that lapsed moments ago also reads 0
/// until a full day has passed.
pub fn classify(
    payment_date: NaiveDate,
    duration_months: u32,
    now: DateTime<Utc>,
) -> StatusSummary {
    let expires_on = expiry_date(payment_date, duration_months);
    let remaining_ms = (expiry_instant(expires_on) - now).num_milliseconds();
    let days_remaining = ceil_div(remaining_ms, MILLIS_PER_DAY);

    StatusSummary {
        status: status_for(days_remaining),
        days_remaining,
        expires_on,
    }
}

/// Tier for a day count: `< 0` Expired, `0..=3` Expiring Soon, otherwise Active.
pub fn status_for(days_remaining: i64) -> MemberStatus {
    if days_remaining < 0 {
        MemberStatus::Expired
    } else if days_remaining <= EXPIRING_SOON_DAYS {
        MemberStatus::ExpiringSoon
    } else {
        MemberStatus::Active
    }
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(y: i32, m: u32, day: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, day, h, min, s).unwrap()
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(status_for(-1), MemberStatus::Expired);
        assert_eq!(status_for(0), MemberStatus::ExpiringSoon);
        assert_eq!(status_for(3), MemberStatus::ExpiringSoon);
        assert_eq!(status_for(4), MemberStatus::Active);
    }

    #[test]
    fn classify_boundaries_from_dates() {
        // expires 2024-02-01T00:00Z
        let paid = d(2024, 1, 1);

        let s = classify(paid, 1, at(2024, 1, 28, 0, 0, 0));
        assert_eq!(s.days_remaining, 4);
        assert_eq!(s.status, MemberStatus::Active);

        let s = classify(paid, 1, at(2024, 1, 29, 0, 0, 0));
        assert_eq!(s.days_remaining, 3);
        assert_eq!(s.status, MemberStatus::ExpiringSoon);

        let s = classify(paid, 1, at(2024, 2, 1, 0, 0, 0));
        assert_eq!(s.days_remaining, 0);
        assert_eq!(s.status, MemberStatus::ExpiringSoon);

        let s = classify(paid, 1, at(2024, 2, 2, 0, 0, 0));
        assert_eq!(s.days_remaining, -1);
        assert_eq!(s.status, MemberStatus::Expired);
        assert_eq!(s.expires_on, d(2024, 2, 1));
    }

    #[test]
    fn fractional_days_round_up() {
        let paid = d(2024, 1, 1);

        // 23h before expiry
        let s = classify(paid, 1, at(2024, 1, 31, 1, 0, 0));
        assert_eq!(s.days_remaining, 1);

        // 3 days and one second left still counts as 4
        let s = classify(paid, 1, at(2024, 1, 28, 23, 59, 59));
        assert_eq!(s.days_remaining, 4);
        assert_eq!(s.status, MemberStatus::Active);

        // just past expiry rounds up to 0, not -1
        let s = classify(paid, 1, at(2024, 2, 1, 0, 0, 1));
        assert_eq!(s.days_remaining, 0);
        assert_eq!(s.status, MemberStatus::ExpiringSoon);

        // a full day and a bit past expiry
        let s = classify(paid, 1, at(2024, 2, 2, 0, 0, 1));
        assert_eq!(s.days_remaining, -1);
    }

    #[test]
    fn deterministic_for_fixed_now() {
        let now = at(2024, 5, 10, 13, 30, 0);
        let first = classify(d(2024, 3, 31), 2, now);
        let second = classify(d(2024, 3, 31), 2, now);
        assert_eq!(first, second);
    }

    #[test]
    fn strictly_decreasing_as_now_advances() {
        let paid = d(2024, 1, 31);
        let mut now = at(2024, 1, 1, 9, 15, 0);
        let mut previous = classify(paid, 3, now).days_remaining;
        for _ in 0..150 {
            now += Duration::days(1);
            let current = classify(paid, 3, now).days_remaining;
            assert!(current < previous, "{current} should be below {previous}");
            previous = current;
        }
    }

    #[test]
    fn month_end_payment_uses_clamped_expiry() {
        let s = classify(d(2024, 1, 31), 1, at(2024, 2, 26, 0, 0, 0));
        assert_eq!(s.expires_on, d(2024, 2, 29));
        assert_eq!(s.days_remaining, 3);
    }

    #[test]
    fn ceil_div_handles_negative_values() {
        assert_eq!(ceil_div(0, 10), 0);
        assert_eq!(ceil_div(1, 10), 1);
        assert_eq!(ceil_div(10, 10), 1);
        assert_eq!(ceil_div(-1, 10), 0);
        assert_eq!(ceil_div(-10, 10), -1);
        assert_eq!(ceil_div(-11, 10), -1);
    }
}
