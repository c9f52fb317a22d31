//! Calendar-month arithmetic
//!
//! Expiry dates are computed with chrono's `checked_add_months`, which clamps
//! day-of-month overflow to the last day of the target month
//! (2024-01-31 + 1 month = 2024-02-29).

use chrono::{DateTime, Months, NaiveDate, NaiveTime, Utc};

/// `date + months` in calendar months, saturating at `NaiveDate::MAX`.
pub fn add_calendar_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Expiry date of a period starting on `payment_date`.
pub fn expiry_date(payment_date: NaiveDate, duration_months: u32) -> NaiveDate {
    add_calendar_months(payment_date, duration_months)
}

/// The instant a membership lapses: midnight UTC at the start of the expiry date.
pub fn expiry_instant(expires_on: NaiveDate) -> DateTime<Utc> {
    expires_on.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn adds_whole_months() {
        assert_eq!(add_calendar_months(d(2024, 1, 1), 1), d(2024, 2, 1));
        assert_eq!(add_calendar_months(d(2024, 1, 15), 12), d(2025, 1, 15));
        assert_eq!(add_calendar_months(d(2024, 11, 15), 3), d(2025, 2, 15));
    }

    #[test]
    fn month_end_overflow_clamps_to_last_day() {
        // leap year
        assert_eq!(add_calendar_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(add_calendar_months(d(2023, 1, 31), 1), d(2023, 2, 28));
        assert_eq!(add_calendar_months(d(2024, 3, 31), 1), d(2024, 4, 30));
        assert_eq!(add_calendar_months(d(2024, 8, 31), 6), d(2025, 2, 28));
    }

    #[test]
    fn zero_months_is_identity() {
        assert_eq!(add_calendar_months(d(2024, 2, 29), 0), d(2024, 2, 29));
    }

    #[test]
    fn saturates_instead_of_panicking() {
        assert_eq!(add_calendar_months(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn expiry_instant_is_utc_midnight() {
        let at = expiry_instant(d(2024, 4, 1));
        assert_eq!(at.to_rfc3339(), "2024-04-01T00:00:00+00:00");
    }
}
