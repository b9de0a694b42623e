//! Calendar-relative deltas.

use std::fmt;
use std::ops::{Add, Neg};

/// A calendar-relative offset.
///
/// Unlike a fixed duration, the effect of the `years` and `months`
/// components depends on the date they are applied to: one month from
/// January 31 is February 28 or 29, one month from March 1 is April 1.
/// The remaining components are fixed-length (a day is always 24 hours
/// on the civil clock).
///
/// # Example
///
/// ```
/// use timeless_calendar::CalendarDelta;
///
/// let delta = CalendarDelta::new().with_months(1).with_days(-2);
/// assert_eq!(delta.months(), 1);
/// assert_eq!(delta.days(), -2);
/// assert_eq!((-delta).months(), -1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CalendarDelta {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    microseconds: i64,
}

impl CalendarDelta {
    /// Creates an all-zero delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the years component.
    pub fn with_years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    /// Sets the months component.
    pub fn with_months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }

    /// Adds `weeks * 7` to the days component.
    pub fn with_weeks(mut self, weeks: i64) -> Self {
        self.days = self.days.saturating_add(weeks.saturating_mul(7));
        self
    }

    /// Sets the days component.
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Sets the hours component.
    pub fn with_hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the minutes component.
    pub fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Sets the seconds component.
    pub fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Sets the microseconds component.
    pub fn with_microseconds(mut self, microseconds: i64) -> Self {
        self.microseconds = microseconds;
        self
    }

    pub fn years(&self) -> i64 {
        self.years
    }

    pub fn months(&self) -> i64 {
        self.months
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn microseconds(&self) -> i64 {
        self.microseconds
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `true` if the delta has a year or month component, i.e. its
    /// length depends on where it is applied.
    pub fn is_calendar_relative(&self) -> bool {
        self.years != 0 || self.months != 0
    }

    /// Multiplies every component by `factor`, saturating at the `i64` bounds.
    pub fn scaled(&self, factor: i64) -> Self {
        Self {
            years: self.years.saturating_mul(factor),
            months: self.months.saturating_mul(factor),
            days: self.days.saturating_mul(factor),
            hours: self.hours.saturating_mul(factor),
            minutes: self.minutes.saturating_mul(factor),
            seconds: self.seconds.saturating_mul(factor),
            microseconds: self.microseconds.saturating_mul(factor),
        }
    }

    /// Flattened length of the fixed-duration components, in microseconds.
    pub(crate) fn fixed_micros(&self) -> i128 {
        i128::from(self.days) * 86_400_000_000
            + i128::from(self.hours) * 3_600_000_000
            + i128::from(self.minutes) * 60_000_000
            + i128::from(self.seconds) * 1_000_000
            + i128::from(self.microseconds)
    }
}

impl Neg for CalendarDelta {
    type Output = Self;

    fn neg(self) -> Self {
        self.scaled(-1)
    }
}

impl Add for CalendarDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            years: self.years.saturating_add(rhs.years),
            months: self.months.saturating_add(rhs.months),
            days: self.days.saturating_add(rhs.days),
            hours: self.hours.saturating_add(rhs.hours),
            minutes: self.minutes.saturating_add(rhs.minutes),
            seconds: self.seconds.saturating_add(rhs.seconds),
            microseconds: self.microseconds.saturating_add(rhs.microseconds),
        }
    }
}

impl fmt::Display for CalendarDelta {
    /// Lists the non-zero components, e.g. `1 years, -2 days`; `0 days` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (self.years, "years"),
            (self.months, "months"),
            (self.days, "days"),
            (self.hours, "hours"),
            (self.minutes, "minutes"),
            (self.seconds, "seconds"),
            (self.microseconds, "microseconds"),
        ];
        let mut first = true;
        for (value, unit) in parts.iter().filter(|(v, _)| *v != 0) {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{value} {unit}")?;
            first = false;
        }
        if first {
            f.write_str("0 days")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert!(CalendarDelta::new().is_zero());
        assert!(!CalendarDelta::new().with_seconds(1).is_zero());
    }

    #[test]
    fn weeks_accumulate_into_days() {
        let delta = CalendarDelta::new().with_days(1).with_weeks(2);
        assert_eq!(delta.days(), 15);
    }

    #[test]
    fn negation_flips_every_component() {
        let delta = CalendarDelta::new()
            .with_years(1)
            .with_months(-2)
            .with_days(3)
            .with_hours(4)
            .with_minutes(5)
            .with_seconds(6)
            .with_microseconds(7);
        let neg = -delta;
        assert_eq!(neg.years(), -1);
        assert_eq!(neg.months(), 2);
        assert_eq!(neg.days(), -3);
        assert_eq!(neg.hours(), -4);
        assert_eq!(neg.minutes(), -5);
        assert_eq!(neg.seconds(), -6);
        assert_eq!(neg.microseconds(), -7);
        assert_eq!(-neg, delta);
    }

    #[test]
    fn calendar_relative_detection() {
        assert!(CalendarDelta::new().with_months(1).is_calendar_relative());
        assert!(!CalendarDelta::new().with_days(30).is_calendar_relative());
    }

    #[test]
    fn fixed_micros_flattens() {
        let delta = CalendarDelta::new()
            .with_days(1)
            .with_hours(-1)
            .with_microseconds(5);
        assert_eq!(delta.fixed_micros(), 23 * 3_600_000_000 + 5);
    }

    #[test]
    fn display_lists_non_zero_parts() {
        let delta = CalendarDelta::new().with_years(1).with_days(-2);
        assert_eq!(delta.to_string(), "1 years, -2 days");
        assert_eq!(CalendarDelta::new().to_string(), "0 days");
    }

    #[test]
    fn add_sums_components() {
        let a = CalendarDelta::new().with_months(1);
        let b = CalendarDelta::new().with_months(2).with_hours(3);
        assert_eq!(a + b, CalendarDelta::new().with_months(3).with_hours(3));
    }
}
