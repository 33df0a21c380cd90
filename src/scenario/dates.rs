//! Start-date arithmetic for the seeded membership
//!
//! The membership is back-dated by a configurable number of days so its
//! expiry-driven behavior can be exercised right after seeding.

use chrono::{Days, Local, NaiveDate};

use crate::core::{Result, SemillaError};

/// The date `offset_days` before `today`
pub fn back_dated(today: NaiveDate, offset_days: u32) -> Result<NaiveDate> {
    today
        .checked_sub_days(Days::new(u64::from(offset_days)))
        .ok_or_else(|| {
            SemillaError::config(format!(
                "start_offset_days {} walks off the calendar",
                offset_days
            ))
        })
}

/// Today's back-dated start date, formatted the way the date input expects
pub fn start_date_string(offset_days: u32) -> Result<String> {
    let date = back_dated(Local::now().date_naive(), offset_days)?;
    Ok(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_back_dated_within_a_month() {
        assert_eq!(back_dated(ymd(2026, 8, 25), 10).unwrap(), ymd(2026, 8, 15));
    }

    #[test]
    fn test_back_dated_crosses_month_boundary() {
        assert_eq!(back_dated(ymd(2026, 3, 1), 30).unwrap(), ymd(2026, 1, 30));
    }

    #[test]
    fn test_back_dated_crosses_year_boundary() {
        assert_eq!(back_dated(ymd(2026, 1, 15), 30).unwrap(), ymd(2025, 12, 16));
    }

    #[test]
    fn test_back_dated_through_a_leap_february() {
        // 2024 has a Feb 29, so 30 days before Mar 1 lands one day later
        assert_eq!(back_dated(ymd(2024, 3, 1), 30).unwrap(), ymd(2024, 1, 31));
        assert_eq!(back_dated(ymd(2023, 3, 1), 30).unwrap(), ymd(2023, 1, 30));
    }

    #[test]
    fn test_back_dated_zero_offset_is_today() {
        assert_eq!(back_dated(ymd(2026, 8, 25), 0).unwrap(), ymd(2026, 8, 25));
    }

    #[test]
    fn test_absurd_offset_is_a_config_error() {
        let err = back_dated(ymd(1, 1, 1), u32::MAX).unwrap_err();
        assert!(matches!(err, SemillaError::Config(_)));
    }

    #[test]
    fn test_format_zero_pads() {
        let date = ymd(2026, 1, 5);
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2026-01-05");
    }

    #[test]
    fn test_start_date_string_matches_plain_subtraction() {
        let expected = Local::now()
            .date_naive()
            .checked_sub_days(Days::new(30))
            .unwrap()
            .format("%Y-%m-%d")
            .to_string();
        // Recompute after in case the test straddles midnight
        let actual = start_date_string(30).unwrap();
        let expected_after = Local::now()
            .date_naive()
            .checked_sub_days(Days::new(30))
            .unwrap()
            .format("%Y-%m-%d")
            .to_string();
        assert!(actual == expected || actual == expected_after);
    }
}
