// Property-based tests for the year-end countdown calculation
// Random instants within a year must keep the documented relationships

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use year_countdown::services::countdown::compute;

#[path = "../fixtures/mod.rs"]
mod fixtures;

/// Instant `seconds` after Jan 1 00:00:00 of `year`, in UTC
fn instant_in_year(year: i32, seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seconds)
}

/// Seconds from Jan 1 00:00:00 to Dec 31 23:59:59 of `year`
fn seconds_in_year(year: i32) -> i64 {
    let days = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    };
    days * 86_400 - 1
}

proptest! {
    /// Property: months depend only on the calendar month
    #[test]
    fn prop_months_follow_calendar(year in 1970..2100i32, fraction in 0.0..1.0f64) {
        let now = instant_in_year(year, (seconds_in_year(year) as f64 * fraction) as i64);
        let snapshot = compute(&now);
        prop_assert_eq!(snapshot.months_remaining, 12 - i64::from(now.month()));
    }

    /// Property: nothing is negative before the year-end instant
    #[test]
    fn prop_non_negative_before_year_end(year in 1970..2100i32, fraction in 0.0..1.0f64) {
        let now = instant_in_year(year, (seconds_in_year(year) as f64 * fraction) as i64);
        let snapshot = compute(&now);
        prop_assert!(snapshot.months_remaining >= 0);
        prop_assert!(snapshot.weeks_remaining >= 0);
        prop_assert!(snapshot.days_remaining >= 0);
        prop_assert!(snapshot.hours_remaining >= 0);
    }

    /// Property: weeks are always whole days divided by seven
    #[test]
    fn prop_weeks_are_days_over_seven(year in 1970..2100i32, offset in -86_400i64..40_000_000i64) {
        let snapshot = compute(&instant_in_year(year, offset));
        prop_assert_eq!(snapshot.weeks_remaining, snapshot.days_remaining / 7);
    }

    /// Property: hours never increase as time moves forward within a year
    #[test]
    fn prop_hours_monotonic(year in 1970..2100i32, a in 0.0..1.0f64, b in 0.0..1.0f64) {
        let total = seconds_in_year(year) as f64;
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let first = compute(&instant_in_year(year, (total * early) as i64));
        let second = compute(&instant_in_year(year, (total * late) as i64));
        prop_assert!(first.hours_remaining >= second.hours_remaining);
        prop_assert!(first.days_remaining >= second.days_remaining);
    }

    /// Property: for a non-negative duration, days equal whole hours / 24
    #[test]
    fn prop_days_and_hours_agree(year in 1970..2100i32, fraction in 0.0..1.0f64) {
        let now = instant_in_year(year, (seconds_in_year(year) as f64 * fraction) as i64);
        let snapshot = compute(&now);
        prop_assert_eq!(snapshot.days_remaining, snapshot.hours_remaining / 24);
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_year_end_boundary_is_zero() {
        let snapshot = compute(&fixtures::dates::year_end_2025());
        assert_eq!(snapshot.hours_remaining, 0);
        assert_eq!(snapshot.days_remaining, 0);
        assert_eq!(snapshot.months_remaining, 0);
    }

    #[test]
    fn test_documented_example() {
        let snapshot = compute(&fixtures::dates::mid_march_2024());
        assert_eq!(snapshot.months_remaining, 9);
        assert_eq!(snapshot.days_remaining, 291);
        assert_eq!(snapshot.weeks_remaining, 41);
        assert_eq!(snapshot.hours_remaining, 7007);
    }

    #[test]
    fn test_leap_day() {
        // Feb 29 12:00 -> Dec 31 23:59:59 is 306 days 11:59:59
        let snapshot = compute(&fixtures::dates::leap_day_2024());
        assert_eq!(snapshot.months_remaining, 10);
        assert_eq!(snapshot.days_remaining, 306);
        assert_eq!(snapshot.hours_remaining, 306 * 24 + 11);
    }

    #[test]
    fn test_first_instant_of_common_year() {
        let snapshot = compute(&fixtures::dates::jan_1_2025());
        assert_eq!(snapshot.months_remaining, 11);
        assert_eq!(snapshot.days_remaining, 364);
        assert_eq!(snapshot.weeks_remaining, 52);
        assert_eq!(snapshot.hours_remaining, 364 * 24 + 23);
    }

    #[test]
    fn test_seconds_in_year() {
        assert_eq!(seconds_in_year(2024), 366 * 86_400 - 1);
        assert_eq!(seconds_in_year(2025), 365 * 86_400 - 1);
    }
}
