//! Validated civil calendar timestamps.

use std::fmt;

use crate::epoch::{civil_from_days, days_from_civil};
use crate::error::CalendarError;
use crate::month::{is_leap_year, month_length, ordinal};
use crate::weekday::{Weekday, weekday_of};

/// Smallest supported year.
pub const MIN_YEAR: i32 = -9999;
/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;
pub(crate) const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
pub(crate) const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;
pub(crate) const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

/// A civil date and time-of-day with microsecond precision and no zone.
///
/// Every field is validated on construction, including the day against
/// the length of its month, so a `CalendarTimestamp` always names a real
/// Gregorian moment. The derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarTimestamp {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
}

fn check(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), CalendarError> {
    if !(min..=max).contains(&value) {
        return Err(CalendarError::InvalidCalendarValue {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl CalendarTimestamp {
    /// Creates a new timestamp from its civil fields.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCalendarValue`] if any field is out
    /// of its fixed bounds and [`CalendarError::InvalidDay`] if `day`
    /// exceeds the length of the month.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<Self, CalendarError> {
        check("year", year.into(), MIN_YEAR.into(), MAX_YEAR.into())?;
        check("month", month.into(), 1, 12)?;
        let max_day = month_length(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        check("hour", hour.into(), 0, 23)?;
        check("minute", minute.into(), 0, 59)?;
        check("second", second.into(), 0, 59)?;
        check("microsecond", microsecond.into(), 0, 999_999)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        })
    }

    /// Creates a timestamp at midnight of the given date.
    ///
    /// # Errors
    ///
    /// Same as [`CalendarTimestamp::new`].
    pub fn date(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Rebuilds a timestamp from microseconds since 1970-01-01T00:00:00,
    /// counted on the civil clock.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the result falls outside
    /// the supported years.
    pub fn from_epoch_micros(micros: i64) -> Result<Self, CalendarError> {
        Self::from_epoch_micros_wide(micros.into())
    }

    pub(crate) fn from_epoch_micros_wide(micros: i128) -> Result<Self, CalendarError> {
        let micros_per_day = i128::from(MICROS_PER_DAY);
        let epoch_day = micros.div_euclid(micros_per_day);
        let rest = micros.rem_euclid(micros_per_day) as i64;
        // Roughly +/-27000 years around the epoch; anything beyond is out
        // of range and would only risk overflow in the civil conversion.
        if epoch_day.unsigned_abs() > 10_000_000 {
            let year = (epoch_day / 365 + 1970).clamp(i64::MIN.into(), i64::MAX.into()) as i64;
            return Err(CalendarError::YearOutOfRange { year });
        }
        let (year, month, day) = civil_from_days(epoch_day as i64);
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(CalendarError::YearOutOfRange { year })?;
        Self::new(
            year,
            month,
            day,
            (rest / MICROS_PER_HOUR) as u8,
            (rest % MICROS_PER_HOUR / MICROS_PER_MINUTE) as u8,
            (rest % MICROS_PER_MINUTE / MICROS_PER_SECOND) as u8,
            (rest % MICROS_PER_SECOND) as u32,
        )
    }

    /// Returns microseconds since 1970-01-01T00:00:00 on the civil clock.
    ///
    /// Always fits: the supported years span well under 2^63 microseconds.
    pub fn to_epoch_micros(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) * MICROS_PER_DAY + self.time_micros()
    }

    /// Microseconds elapsed since midnight.
    pub fn time_micros(&self) -> i64 {
        i64::from(self.hour) * MICROS_PER_HOUR
            + i64::from(self.minute) * MICROS_PER_MINUTE
            + i64::from(self.second) * MICROS_PER_SECOND
            + i64::from(self.microsecond)
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the microsecond (0..=999_999).
    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// Returns the same date at 00:00:00.000000.
    pub fn start_of_day(&self) -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            microsecond: 0,
            ..*self
        }
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        weekday_of(self.year, self.month, self.day)
    }

    /// Returns the ordinal day of the year (1..=366).
    pub fn day_of_year(&self) -> u16 {
        ordinal(self.year, self.month, self.day)
    }

    /// Returns the number of days in this timestamp's month.
    pub fn days_in_month(&self) -> u8 {
        month_length(self.year, self.month)
    }

    /// Returns `true` if this timestamp's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }
}

impl fmt::Display for CalendarTimestamp {
    /// Formats as `YYYY-MM-DDTHH:MM:SS`, with `.ffffff` only when the
    /// microsecond is non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:06}", -i64::from(self.year))?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let ts = CalendarTimestamp::new(1994, 2, 26, 11, 15, 30, 250).unwrap();
        assert_eq!(ts.year(), 1994);
        assert_eq!(ts.month(), 2);
        assert_eq!(ts.day(), 26);
        assert_eq!(ts.hour(), 11);
        assert_eq!(ts.minute(), 15);
        assert_eq!(ts.second(), 30);
        assert_eq!(ts.microsecond(), 250);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarTimestamp::date(2000, 13, 1).unwrap_err(),
            CalendarError::InvalidCalendarValue {
                field: "month",
                value: 13,
                min: 1,
                max: 12,
            }
        );
    }

    #[test]
    fn new_invalid_day_is_not_clamped() {
        assert_eq!(
            CalendarTimestamp::date(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29,
                max_day: 28,
            }
        );
        assert!(CalendarTimestamp::date(2024, 2, 29).is_ok());
        assert!(CalendarTimestamp::date(2024, 1, 0).is_err());
    }

    #[test]
    fn new_invalid_time_fields() {
        assert!(CalendarTimestamp::new(2000, 1, 1, 24, 0, 0, 0).is_err());
        assert!(CalendarTimestamp::new(2000, 1, 1, 0, 60, 0, 0).is_err());
        assert!(CalendarTimestamp::new(2000, 1, 1, 0, 0, 60, 0).is_err());
        assert!(CalendarTimestamp::new(2000, 1, 1, 0, 0, 0, 1_000_000).is_err());
    }

    #[test]
    fn new_invalid_year() {
        assert!(CalendarTimestamp::date(10_000, 1, 1).is_err());
        assert!(CalendarTimestamp::date(-10_000, 1, 1).is_err());
        assert!(CalendarTimestamp::date(MAX_YEAR, 12, 31).is_ok());
        assert!(CalendarTimestamp::date(MIN_YEAR, 1, 1).is_ok());
    }

    #[test]
    fn epoch_micros_roundtrip() {
        let ts = CalendarTimestamp::new(1969, 12, 31, 23, 59, 59, 999_999).unwrap();
        assert_eq!(ts.to_epoch_micros(), -1);
        assert_eq!(CalendarTimestamp::from_epoch_micros(-1).unwrap(), ts);

        let ts = CalendarTimestamp::new(2021, 6, 15, 8, 30, 0, 42).unwrap();
        assert_eq!(
            CalendarTimestamp::from_epoch_micros(ts.to_epoch_micros()).unwrap(),
            ts
        );
    }

    #[test]
    fn from_epoch_micros_out_of_range() {
        let last = CalendarTimestamp::new(MAX_YEAR, 12, 31, 23, 59, 59, 999_999).unwrap();
        assert!(matches!(
            CalendarTimestamp::from_epoch_micros(last.to_epoch_micros() + 1),
            Err(CalendarError::YearOutOfRange { year: 10_000 })
        ));
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CalendarTimestamp::new(1975, 12, 31, 23, 0, 0, 0).unwrap();
        let b = CalendarTimestamp::date(1976, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn start_of_day_zeroes_time() {
        let ts = CalendarTimestamp::new(1975, 1, 1, 3, 1, 10, 1).unwrap();
        assert_eq!(ts.start_of_day(), CalendarTimestamp::date(1975, 1, 1).unwrap());
    }

    #[test]
    fn display_iso() {
        let ts = CalendarTimestamp::new(1994, 2, 26, 9, 5, 0, 0).unwrap();
        assert_eq!(ts.to_string(), "1994-02-26T09:05:00");
        let ts = CalendarTimestamp::new(1994, 2, 26, 9, 5, 0, 120).unwrap();
        assert_eq!(ts.to_string(), "1994-02-26T09:05:00.000120");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CalendarTimestamp>();
    }
}
