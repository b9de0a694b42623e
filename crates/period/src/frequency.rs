//! The unit a period advances by.

use std::fmt;
use std::str::FromStr;

use timeless_calendar::CalendarDelta;

use crate::error::PeriodError;

/// Calendar unit a [`crate::Period`] steps through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Frequency {
    Years,
    Months,
    Weeks,
    #[default]
    Days,
    Hours,
    Minutes,
    Seconds,
    Microseconds,
}

impl Frequency {
    /// Every frequency, longest unit first.
    pub const ALL: [Frequency; 8] = [
        Frequency::Years,
        Frequency::Months,
        Frequency::Weeks,
        Frequency::Days,
        Frequency::Hours,
        Frequency::Minutes,
        Frequency::Seconds,
        Frequency::Microseconds,
    ];

    /// Returns a delta of `n` units of this frequency.
    ///
    /// ```
    /// use timeless_period::Frequency;
    ///
    /// assert_eq!(Frequency::Weeks.delta(2).days(), 14);
    /// assert_eq!(Frequency::Months.delta(-1).months(), -1);
    /// ```
    pub fn delta(self, n: i64) -> CalendarDelta {
        let delta = CalendarDelta::new();
        match self {
            Frequency::Years => delta.with_years(n),
            Frequency::Months => delta.with_months(n),
            Frequency::Weeks => delta.with_weeks(n),
            Frequency::Days => delta.with_days(n),
            Frequency::Hours => delta.with_hours(n),
            Frequency::Minutes => delta.with_minutes(n),
            Frequency::Seconds => delta.with_seconds(n),
            Frequency::Microseconds => delta.with_microseconds(n),
        }
    }

    /// Returns the plural lowercase name, e.g. `"days"`.
    pub fn name(self) -> &'static str {
        match self {
            Frequency::Years => "years",
            Frequency::Months => "months",
            Frequency::Weeks => "weeks",
            Frequency::Days => "days",
            Frequency::Hours => "hours",
            Frequency::Minutes => "minutes",
            Frequency::Seconds => "seconds",
            Frequency::Microseconds => "microseconds",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frequency {
    type Err = PeriodError;

    /// Accepts singular or plural names in any case (`"day"`, `"Days"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(lower.as_str());
        Frequency::ALL
            .into_iter()
            .find(|freq| freq.name().strip_suffix('s') == Some(singular))
            .ok_or_else(|| PeriodError::UnknownFrequency {
                name: s.to_string(),
            })
    }
}
