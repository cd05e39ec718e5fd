// Countdown module
// Value types produced by the year-end countdown calculation

use std::fmt;

/// One of the four quantities shown on the countdown cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountdownUnit {
    Months,
    Weeks,
    Days,
    Hours,
}

impl CountdownUnit {
    /// Display order of the cards, left to right
    pub const ALL: [CountdownUnit; 4] = [
        CountdownUnit::Months,
        CountdownUnit::Weeks,
        CountdownUnit::Days,
        CountdownUnit::Hours,
    ];

    /// Card title for this unit
    pub fn label(self) -> &'static str {
        match self {
            CountdownUnit::Months => "Months",
            CountdownUnit::Weeks => "Weeks",
            CountdownUnit::Days => "Days",
            CountdownUnit::Hours => "Hours",
        }
    }
}

/// Time left until the end of the current year.
///
/// Months are calendar based (`12 - current month`). Weeks, days and hours are
/// derived from the duration up to `Dec 31 23:59:59`; days and hours are each
/// truncated from that duration independently. Once that instant has passed the
/// duration based fields may be zero or negative.
///
/// # Examples
/// ```
/// use year_countdown::models::countdown::{CountdownSnapshot, CountdownUnit};
///
/// let snapshot = CountdownSnapshot::new(9, 41, 291, 7007);
/// assert_eq!(snapshot.value(CountdownUnit::Weeks), 41);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CountdownSnapshot {
    pub months_remaining: i64,
    pub weeks_remaining: i64,
    pub days_remaining: i64,
    pub hours_remaining: i64,
}

impl CountdownSnapshot {
    pub fn new(
        months_remaining: i64,
        weeks_remaining: i64,
        days_remaining: i64,
        hours_remaining: i64,
    ) -> Self {
        Self {
            months_remaining,
            weeks_remaining,
            days_remaining,
            hours_remaining,
        }
    }

    /// Value displayed on the card for `unit`
    pub fn value(&self, unit: CountdownUnit) -> i64 {
        match unit {
            CountdownUnit::Months => self.months_remaining,
            CountdownUnit::Weeks => self.weeks_remaining,
            CountdownUnit::Days => self.days_remaining,
            CountdownUnit::Hours => self.hours_remaining,
        }
    }
}

impl fmt::Display for CountdownSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} months, {} weeks, {} days, {} hours",
            self.months_remaining, self.weeks_remaining, self.days_remaining, self.hours_remaining
        )
    }
}
