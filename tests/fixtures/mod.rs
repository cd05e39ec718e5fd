// Test fixtures - reusable test data
// Provides consistent instants across the countdown test files

use chrono::{DateTime, TimeZone, Utc};

/// Sample instants for testing, all in UTC so results do not depend on the
/// host timezone
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025 at midnight
    pub fn jan_1_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    /// Returns Mar 15, 2024 at midnight (the documented example)
    pub fn mid_march_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
    }

    /// Returns Feb 29, 2024 at noon (leap year)
    pub fn leap_day_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    }

    /// Returns Dec 31, 2025 at 23:59:59 (the year-end instant)
    pub fn year_end_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap()
    }
}
