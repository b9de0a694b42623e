//! Days of the week and week-start-relative indexing.

use std::fmt;
use std::str::FromStr;

use crate::epoch::days_from_civil;
use crate::error::CalendarError;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Returns the ISO index of this weekday, Monday = 0 through Sunday = 6.
    pub fn number_from_monday(self) -> u8 {
        self as u8
    }

    /// Returns the weekday with the given ISO index, wrapping modulo 7.
    pub fn from_monday_index(index: i64) -> Self {
        ALL[index.rem_euclid(7) as usize]
    }

    /// Returns the lowercase English name (`"monday"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Number of days from `self` forward to the next `target` (0..=6).
    ///
    /// Zero when both are the same weekday.
    pub fn days_until(self, target: Weekday) -> u8 {
        (i64::from(target.number_from_monday()) - i64::from(self.number_from_monday()))
            .rem_euclid(7) as u8
    }

    /// Number of days from `self` back to the previous `target` (0..=6).
    pub fn days_since(self, target: Weekday) -> u8 {
        target.days_until(self)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    /// Parses a full or three-letter English weekday name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL.into_iter()
            .find(|w| w.name() == lower || (lower.len() == 3 && w.name().starts_with(&lower)))
            .ok_or_else(|| CalendarError::UnknownWeekday {
                name: s.to_string(),
            })
    }
}

/// Returns the weekday of a valid proleptic Gregorian date.
pub fn weekday_of(year: i32, month: u8, day: u8) -> Weekday {
    // 1970-01-01 was a Thursday.
    Weekday::from_monday_index(days_from_civil(year, month, day) + 3)
}

/// Returns the position of a date within a week that begins on `week_start`.
///
/// The ISO weekday is rebased so that `week_start` maps to 0; with a
/// Sunday start, a Sunday is 0 and a Saturday is 6.
///
/// ```
/// use timeless_calendar::{Weekday, weekday_index};
///
/// // 1994-02-26 was a Saturday.
/// assert_eq!(weekday_index(1994, 2, 26, Weekday::Monday), 5);
/// assert_eq!(weekday_index(1994, 2, 26, Weekday::Sunday), 6);
/// assert_eq!(weekday_index(1994, 2, 26, Weekday::Saturday), 0);
/// ```
pub fn weekday_index(year: i32, month: u8, day: u8, week_start: Weekday) -> u8 {
    week_start.days_until(weekday_of(year, month, day))
}
