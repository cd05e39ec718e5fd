//! Year-end countdown calculation.
//!
//! Converts a point in time into the four integers shown on the cards. The
//! function is total: after `Dec 31 23:59:59` it keeps going and yields zero or
//! negative values instead of failing.

use chrono::{DateTime, Datelike, Local, TimeZone};

use crate::models::countdown::CountdownSnapshot;
use crate::utils::date::{end_of_year, end_of_year_naive};

/// Compute the time remaining from `now` until `Dec 31 23:59:59` of its year,
/// resolved in `now`'s own timezone.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use year_countdown::services::countdown::compute;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
/// let snapshot = compute(&now);
/// assert_eq!(snapshot.months_remaining, 9);
/// assert_eq!(snapshot.weeks_remaining, 41);
/// assert_eq!(snapshot.days_remaining, 291);
/// assert_eq!(snapshot.hours_remaining, 7007);
/// ```
pub fn compute<Tz: TimeZone>(now: &DateTime<Tz>) -> CountdownSnapshot {
    let remaining = match end_of_year(now) {
        Some(end) => end.signed_duration_since(now.clone()),
        // Dec 31 23:59:59 skipped by the zone; fall back to wall-clock time
        None => match end_of_year_naive(now.year()) {
            Some(end) => end.signed_duration_since(now.naive_local()),
            None => chrono::Duration::zero(),
        },
    };

    // Days and hours are truncated from the same duration independently
    let total_hours = remaining.num_hours();
    let total_days = remaining.num_days();

    CountdownSnapshot {
        months_remaining: 12 - i64::from(now.month()),
        weeks_remaining: total_days / 7,
        days_remaining: total_days,
        hours_remaining: total_hours,
    }
}

/// [`compute`] against the host's local clock
pub fn compute_now() -> CountdownSnapshot {
    compute(&Local::now())
}
