//! Week and month spans around a reference day.

use timeless_calendar::{CalendarDelta, Weekday};
use timeless_datetime::{ZonedInstant, today};

use crate::error::PeriodError;
use crate::frequency::Frequency;
use crate::period::Period;

/// Frequency and step for the span helpers.
///
/// Defaults to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanOptions {
    frequency: Frequency,
    step: i64,
}

impl SpanOptions {
    pub fn new() -> Self {
        Self {
            frequency: Frequency::Days,
            step: 1,
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn step(&self) -> i64 {
        self.step
    }
}

impl Default for SpanOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the week containing `day`, from midnight on the most recent
/// `week_start` (the day itself when it is one) to midnight six days later.
///
/// # Errors
///
/// Returns [`PeriodError::ZeroStep`] for a zero step in `options`, and
/// [`PeriodError::InvalidRange`] for a negative one.
///
/// # Example
///
/// ```
/// use timeless_calendar::Weekday;
/// use timeless_datetime::datetime;
/// use timeless_period::{SpanOptions, week_of};
///
/// // 1994-02-26 was a Saturday.
/// let week = week_of(&datetime(1994, 2, 26).unwrap(), Weekday::Monday, SpanOptions::new()).unwrap();
/// assert_eq!(week.start().day(), 21);
/// assert_eq!(week.end().day(), 27);
/// assert_eq!(week.len(), 7);
/// ```
pub fn week_of(
    day: &ZonedInstant,
    week_start: Weekday,
    options: SpanOptions,
) -> Result<Period, PeriodError> {
    let start = if day.weekday() == week_start {
        day.set_zero()
    } else {
        day.get_last(week_start)?
    };
    let end = start.add(&CalendarDelta::new().with_days(6))?;
    Period::new(start, end, options.frequency, options.step)
}

/// Returns the week containing today in `zone`.
///
/// # Errors
///
/// Fails like [`week_of`], or with an unknown zone.
pub fn current_week(
    week_start: Weekday,
    zone: &str,
    options: SpanOptions,
) -> Result<Period, PeriodError> {
    week_of(&today(zone)?, week_start, options)
}

/// Returns the month containing `day`, from midnight on its first day to
/// midnight on its last.
///
/// # Errors
///
/// Returns [`PeriodError::ZeroStep`] for a zero step in `options`, and
/// [`PeriodError::InvalidRange`] for a negative one.
pub fn month_of(day: &ZonedInstant, options: SpanOptions) -> Result<Period, PeriodError> {
    let start = day.get_month_start()?.set_zero();
    let end = start.get_month_end()?;
    Period::new(start, end, options.frequency, options.step)
}

/// Returns the month containing today in `zone`.
///
/// # Errors
///
/// Fails like [`month_of`], or with an unknown zone.
pub fn current_month(zone: &str, options: SpanOptions) -> Result<Period, PeriodError> {
    month_of(&today(zone)?, options)
}
