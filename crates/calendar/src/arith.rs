//! Applying calendar deltas to civil timestamps, and the inverse diff.
//!
//! Addition runs in a fixed order:
//!
//! 1. years and months are folded into a single month count and normalized
//!    into a valid `(year, month)`;
//! 2. the original day is clamped to the length of that month, once;
//! 3. days, hours, minutes, seconds and microseconds are summed into one
//!    fixed-length offset and added on a flat microsecond clock.
//!
//! The result is re-validated by [`CalendarTimestamp::new`].

use crate::delta::CalendarDelta;
use crate::epoch::days_from_civil;
use crate::error::CalendarError;
use crate::month::{clamp_to_month, normalize_month_overflow};
use crate::timestamp::{
    CalendarTimestamp, MAX_YEAR, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE,
    MICROS_PER_SECOND, MIN_YEAR,
};

impl CalendarTimestamp {
    /// Returns this timestamp shifted by `delta`.
    ///
    /// Month overflow clamps to the end of the month: 2012-01-31 plus one
    /// month is 2012-02-29. Clamping happens before the fixed-length
    /// components are applied.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the result lies outside
    /// the supported years. No other input can fail.
    ///
    /// # Example
    ///
    /// ```
    /// use timeless_calendar::{CalendarDelta, CalendarTimestamp};
    ///
    /// let ts = CalendarTimestamp::date(2012, 1, 31).unwrap();
    /// let next = ts.checked_add(&CalendarDelta::new().with_months(1)).unwrap();
    /// assert_eq!((next.month(), next.day()), (2, 29));
    /// ```
    pub fn checked_add(&self, delta: &CalendarDelta) -> Result<Self, CalendarError> {
        let (year, month, day) = self.shift_months(delta.years(), delta.months())?;
        let base = i128::from(days_from_civil(year, month, day)) * i128::from(MICROS_PER_DAY)
            + i128::from(self.time_micros());
        Self::from_epoch_micros_wide(base + delta.fixed_micros())
    }

    /// Returns this timestamp shifted back by `delta`.
    ///
    /// Equivalent to adding the negated delta.
    ///
    /// # Errors
    ///
    /// Same as [`CalendarTimestamp::checked_add`].
    pub fn checked_sub(&self, delta: &CalendarDelta) -> Result<Self, CalendarError> {
        self.checked_add(&-*delta)
    }

    /// Returns the calendar-relative delta that takes `self` to `other`.
    ///
    /// The delta is broken down into years and months first, then the
    /// fixed-length remainder into days, hours, minutes, seconds and
    /// microseconds. All components share one sign. Adding the result back
    /// to `self` always yields `other`.
    ///
    /// ```
    /// use timeless_calendar::CalendarTimestamp;
    ///
    /// let a = CalendarTimestamp::date(2020, 1, 31).unwrap();
    /// let b = CalendarTimestamp::new(2021, 3, 2, 6, 0, 0, 0).unwrap();
    /// let delta = a.until(&b);
    /// assert_eq!((delta.years(), delta.months(), delta.days(), delta.hours()), (1, 1, 2, 6));
    /// assert_eq!(a.checked_add(&delta).unwrap(), b);
    /// ```
    pub fn until(&self, other: &CalendarTimestamp) -> CalendarDelta {
        let target = i128::from(other.to_epoch_micros());
        let mut months = (i64::from(other.year()) * 12 + i64::from(other.month()))
            - (i64::from(self.year()) * 12 + i64::from(self.month()));
        let mut remainder = target - self.month_anchor_micros(months);
        if months > 0 && remainder < 0 {
            months -= 1;
            remainder = target - self.month_anchor_micros(months);
        } else if months < 0 && remainder > 0 {
            months += 1;
            remainder = target - self.month_anchor_micros(months);
        }

        let sign: i64 = if remainder < 0 { -1 } else { 1 };
        // Bounded by a little over a month, so it fits an i64.
        let rest = remainder.unsigned_abs() as i64;
        CalendarDelta::new()
            .with_years(months / 12)
            .with_months(months % 12)
            .with_days(sign * (rest / MICROS_PER_DAY))
            .with_hours(sign * (rest % MICROS_PER_DAY / MICROS_PER_HOUR))
            .with_minutes(sign * (rest % MICROS_PER_HOUR / MICROS_PER_MINUTE))
            .with_seconds(sign * (rest % MICROS_PER_MINUTE / MICROS_PER_SECOND))
            .with_microseconds(sign * (rest % MICROS_PER_SECOND))
    }

    /// Applies the year/month part of a delta and clamps the day.
    fn shift_months(&self, years: i64, months: i64) -> Result<(i32, u8, u8), CalendarError> {
        let overflow = |positive: bool| CalendarError::YearOutOfRange {
            year: if positive { i64::MAX } else { i64::MIN },
        };
        let year = i64::from(self.year())
            .checked_add(years)
            .ok_or_else(|| overflow(years > 0))?;
        let month_raw = i64::from(self.month())
            .checked_add(months)
            .ok_or_else(|| overflow(months > 0))?;
        let (year, month) = normalize_month_overflow(year, month_raw);
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(CalendarError::YearOutOfRange { year })?;
        Ok((year, month, clamp_to_month(year, month, self.day())))
    }

    /// Civil microseconds of `self` shifted by `months`, clamped, time kept.
    ///
    /// Only used between two valid timestamps, so the shifted month always
    /// lies inside the supported years.
    fn month_anchor_micros(&self, months: i64) -> i128 {
        let (year, month) =
            normalize_month_overflow(self.year().into(), i64::from(self.month()) + months);
        let year = year as i32;
        let day = clamp_to_month(year, month, self.day());
        i128::from(days_from_civil(year, month, day)) * i128::from(MICROS_PER_DAY)
            + i128::from(self.time_micros())
    }
}
