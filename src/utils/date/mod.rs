// Date utility functions

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// Wall-clock `Dec 31 23:59:59` of `year`, without a timezone
pub fn end_of_year_naive(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 12, 31)?.and_hms_opt(23, 59, 59)
}

/// `Dec 31 23:59:59` of `date`'s year, in `date`'s timezone.
///
/// Ambiguous local times resolve to the earliest instant. Returns `None` when
/// that wall-clock time does not exist in the zone.
pub fn end_of_year<Tz: TimeZone>(date: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let naive = end_of_year_naive(date.year())?;
    date.timezone().from_local_datetime(&naive).earliest()
}
