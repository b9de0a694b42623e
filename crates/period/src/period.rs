//! Evenly spaced sequences of instants.

use std::cmp::Ordering;

use timeless_calendar::CalendarDelta;
use timeless_datetime::ZonedInstant;
use tracing::{debug, warn};

use crate::error::PeriodError;
use crate::frequency::Frequency;

/// How the end of a [`Period`] is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodEnd {
    /// The last instant, inclusive.
    Instant(ZonedInstant),
    /// The number of elements, at least 1.
    Count(usize),
}

impl From<ZonedInstant> for PeriodEnd {
    fn from(end: ZonedInstant) -> Self {
        PeriodEnd::Instant(end)
    }
}

impl From<usize> for PeriodEnd {
    fn from(count: usize) -> Self {
        PeriodEnd::Count(count)
    }
}

/// An inclusive, evenly spaced run of instants from `start` to `end`.
///
/// A period stores only its bounds, frequency, step and, when built from a
/// count, that count. Elements are generated on demand by [`Period::iter`],
/// each call starting again from `start`: the cursor begins at `start` and
/// advances by `step` units of `frequency` while it has not passed `end`, or
/// for a counted period until the count runs out.
///
/// Two periods compare by [`Period::duration`] alone, so a week of days and
/// a week of hours are equal.
///
/// # Example
///
/// ```
/// use timeless_datetime::datetime;
/// use timeless_period::{Frequency, Period};
///
/// let period = Period::new(
///     datetime(1975, 1, 1).unwrap(),
///     datetime(1975, 1, 3).unwrap(),
///     Frequency::Days,
///     1,
/// )
/// .unwrap();
/// let days: Vec<u8> = period.iter().map(|dt| dt.day()).collect();
/// assert_eq!(days, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Period {
    start: ZonedInstant,
    end: ZonedInstant,
    frequency: Frequency,
    step: i64,
    count: Option<usize>,
}

impl Period {
    /// Creates a period.
    ///
    /// A [`PeriodEnd::Count`] of `n` resolves the end to
    /// `start + frequency × (step × (n − 1))` and the period yields exactly
    /// `n` steps, even when month clamping makes later steps drift off that
    /// end. A daylight-saving gap that collapses two steps onto one instant
    /// yields it once.
    ///
    /// # Errors
    ///
    /// - [`PeriodError::ZeroStep`] if `step` is zero.
    /// - [`PeriodError::ZeroCount`] if the count is zero.
    /// - [`PeriodError::InvalidRange`] if the resolved end lies before the
    ///   start for a positive step, or after it for a negative step.
    /// - [`PeriodError::Datetime`] if resolving a count leaves the supported
    ///   years.
    #[tracing::instrument(skip(start, end), fields(start = %start))]
    pub fn new(
        start: ZonedInstant,
        end: impl Into<PeriodEnd>,
        frequency: Frequency,
        step: i64,
    ) -> Result<Self, PeriodError> {
        if step == 0 {
            return Err(PeriodError::ZeroStep);
        }
        let (end, count) = match end.into() {
            PeriodEnd::Instant(end) => (end, None),
            PeriodEnd::Count(0) => return Err(PeriodError::ZeroCount),
            PeriodEnd::Count(count) => {
                let units = i64::try_from(count - 1)
                    .unwrap_or(i64::MAX)
                    .saturating_mul(step);
                let end = start.add(&frequency.delta(units))?;
                debug!(count, %end, "resolved count to end");
                (end, Some(count))
            }
        };

        if step > 0 && end < start {
            return Err(PeriodError::InvalidRange {
                start,
                end,
                step,
                side: "before",
            });
        }
        if step < 0 && end > start {
            return Err(PeriodError::InvalidRange {
                start,
                end,
                step,
                side: "after",
            });
        }

        Ok(Self {
            start,
            end,
            frequency,
            step,
            count,
        })
    }

    pub fn start(&self) -> ZonedInstant {
        self.start
    }

    /// Returns the resolved end bound. It is the last element only when the
    /// steps land on it exactly.
    pub fn end(&self) -> ZonedInstant {
        self.end
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns the count the period was built from, if any.
    pub fn count(&self) -> Option<usize> {
        self.count
    }

    /// Returns the delta between consecutive elements.
    pub fn step_delta(&self) -> CalendarDelta {
        self.frequency.delta(self.step)
    }

    /// Returns a fresh iterator over the elements.
    pub fn iter(&self) -> PeriodIter {
        PeriodIter {
            cursor: Some(self.start),
            previous: None,
            end: self.end,
            delta: self.step_delta(),
            ascending: self.step > 0,
            remaining: self.count,
        }
    }

    /// Collects every element.
    pub fn to_vec(&self) -> Vec<ZonedInstant> {
        self.iter().collect()
    }

    /// Counts the elements by generating them.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always `false`: `start` itself is always an element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns a period with both bounds moved by `delta`, keeping the
    /// frequency and step.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::Datetime`] if a bound leaves the supported
    /// years.
    ///
    /// ```
    /// use timeless_calendar::CalendarDelta;
    /// use timeless_datetime::datetime;
    /// use timeless_period::{Frequency, Period};
    ///
    /// let period = Period::new(datetime(1975, 1, 1).unwrap(), 3, Frequency::Days, 1).unwrap();
    /// let next = period.shift(&CalendarDelta::new().with_days(1)).unwrap();
    /// assert_eq!(next.start().day(), 2);
    /// assert_eq!(next.end().day(), 4);
    /// ```
    pub fn shift(&self, delta: &CalendarDelta) -> Result<Self, PeriodError> {
        Ok(Self {
            start: self.start.add(delta)?,
            end: self.end.add(delta)?,
            frequency: self.frequency,
            step: self.step,
            count: self.count,
        })
    }

    /// Returns `|end − start|` in microseconds of absolute time.
    pub fn duration(&self) -> i64 {
        (self.end.to_utc_micros() - self.start.to_utc_micros()).abs()
    }

    /// Returns `|end − start|` in seconds of absolute time.
    pub fn duration_seconds(&self) -> f64 {
        self.duration() as f64 / 1e6
    }
}

impl PartialEq for Period {
    fn eq(&self, other: &Self) -> bool {
        self.duration() == other.duration()
    }
}

impl Eq for Period {}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.duration().cmp(&other.duration())
    }
}

impl<'a> IntoIterator for &'a Period {
    type Item = ZonedInstant;
    type IntoIter = PeriodIter;

    fn into_iter(self) -> PeriodIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`Period`].
///
/// Each element is the previous cursor advanced by the step on the civil
/// clock. A counted period stops after its count of steps; any other stops
/// once the cursor passes `end`. When a daylight-saving gap maps a cursor onto an instant that is
/// not strictly beyond the last yielded one, it is skipped, so output is
/// always strictly monotonic.
#[derive(Debug, Clone)]
pub struct PeriodIter {
    cursor: Option<ZonedInstant>,
    previous: Option<ZonedInstant>,
    end: ZonedInstant,
    delta: CalendarDelta,
    ascending: bool,
    remaining: Option<usize>,
}

impl PeriodIter {
    fn within_end(&mut self, value: &ZonedInstant) -> bool {
        if let Some(remaining) = &mut self.remaining {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
            return true;
        }
        if self.ascending {
            *value <= self.end
        } else {
            *value >= self.end
        }
    }

    fn beyond_previous(&self, value: &ZonedInstant) -> bool {
        match &self.previous {
            None => true,
            Some(previous) if self.ascending => value > previous,
            Some(previous) => value < previous,
        }
    }

    fn advance(&mut self, from: &ZonedInstant) {
        self.cursor = match from.add(&self.delta) {
            Ok(next) => Some(next),
            Err(e) => {
                debug!(error = %e, "cursor left the supported range");
                None
            }
        };
    }
}

impl Iterator for PeriodIter {
    type Item = ZonedInstant;

    fn next(&mut self) -> Option<ZonedInstant> {
        loop {
            let current = self.cursor?;
            if !self.within_end(&current) {
                self.cursor = None;
                return None;
            }
            self.advance(&current);
            if self.beyond_previous(&current) {
                self.previous = Some(current);
                return Some(current);
            }
            warn!(value = %current, "skipping instant repeated by a zone transition");
        }
    }
}

impl std::iter::FusedIterator for PeriodIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use timeless_datetime::datetime;

    fn ymd(dt: &ZonedInstant) -> (i32, u8, u8) {
        (dt.year(), dt.month(), dt.day())
    }

    #[test]
    fn inclusive_days() {
        let period = Period::new(
            datetime(1975, 1, 1).unwrap(),
            datetime(1975, 1, 3).unwrap(),
            Frequency::Days,
            1,
        )
        .unwrap();
        let values: Vec<_> = period.iter().map(|v| ymd(&v)).collect();
        assert_eq!(values, vec![(1975, 1, 1), (1975, 1, 2), (1975, 1, 3)]);
    }

    #[test]
    fn end_not_on_a_step_is_not_yielded() {
        let period = Period::new(
            datetime(1975, 1, 1).unwrap(),
            datetime(1975, 1, 6).unwrap(),
            Frequency::Days,
            2,
        )
        .unwrap();
        let days: Vec<u8> = period.iter().map(|v| v.day()).collect();
        assert_eq!(days, vec![1, 3, 5]);
    }

    #[test]
    fn single_element_when_start_equals_end() {
        let start = datetime(1975, 1, 1).unwrap();
        let period = Period::new(start, start, Frequency::Hours, 1).unwrap();
        assert_eq!(period.to_vec(), vec![start]);
    }

    #[test]
    fn count_resolves_end() {
        let period = Period::new(datetime(1975, 1, 1).unwrap(), 7, Frequency::Days, 1).unwrap();
        assert_eq!(ymd(&period.end()), (1975, 1, 7));
        assert_eq!(period.len(), 7);
    }

    #[test]
    fn count_with_step() {
        let period = Period::new(datetime(1975, 1, 1).unwrap(), 3, Frequency::Months, 2).unwrap();
        let months: Vec<u8> = period.iter().map(|v| v.month()).collect();
        assert_eq!(months, vec![1, 3, 5]);
    }

    #[test]
    fn negative_step_descends() {
        let period = Period::new(datetime(1975, 1, 3).unwrap(), 3, Frequency::Days, -1).unwrap();
        let days: Vec<u8> = period.iter().map(|v| v.day()).collect();
        assert_eq!(days, vec![3, 2, 1]);
    }

    #[test]
    fn negative_month_count_survives_clamping() {
        let period = Period::new(datetime(2021, 3, 31).unwrap(), 3, Frequency::Months, -1).unwrap();
        assert_eq!(ymd(&period.end()), (2021, 1, 31));
        let values: Vec<_> = period.iter().map(|v| ymd(&v)).collect();
        assert_eq!(values, vec![(2021, 3, 31), (2021, 2, 28), (2021, 1, 28)]);
        assert_eq!(period.count(), Some(3));
    }

    #[test]
    fn negative_year_count_from_leap_day() {
        let period = Period::new(datetime(2024, 2, 29).unwrap(), 3, Frequency::Years, -4).unwrap();
        let values: Vec<_> = period.iter().map(|v| ymd(&v)).collect();
        assert_eq!(values, vec![(2024, 2, 29), (2020, 2, 29), (2016, 2, 29)]);

        let yearly = Period::new(datetime(2024, 2, 29).unwrap(), 3, Frequency::Years, -1).unwrap();
        assert_eq!(yearly.len(), 3);
    }

    #[test]
    fn zero_step_rejected() {
        let start = datetime(1975, 1, 1).unwrap();
        assert_eq!(
            Period::new(start, start, Frequency::Days, 0).unwrap_err(),
            PeriodError::ZeroStep
        );
    }

    #[test]
    fn zero_count_rejected() {
        let start = datetime(1975, 1, 1).unwrap();
        assert_eq!(
            Period::new(start, 0, Frequency::Days, 1).unwrap_err(),
            PeriodError::ZeroCount
        );
    }

    #[test]
    fn end_before_start_rejected() {
        let err = Period::new(
            datetime(1975, 1, 3).unwrap(),
            datetime(1975, 1, 1).unwrap(),
            Frequency::Days,
            1,
        )
        .unwrap_err();
        assert!(matches!(err, PeriodError::InvalidRange { side: "before", .. }));
    }

    #[test]
    fn negative_step_needs_end_before_start() {
        let err = Period::new(
            datetime(1975, 1, 1).unwrap(),
            datetime(1975, 1, 3).unwrap(),
            Frequency::Days,
            -1,
        )
        .unwrap_err();
        assert!(matches!(err, PeriodError::InvalidRange { side: "after", .. }));
    }

    #[test]
    fn iteration_restarts() {
        let period = Period::new(datetime(1975, 1, 1).unwrap(), 4, Frequency::Weeks, 1).unwrap();
        assert_eq!(period.to_vec(), period.to_vec());
        assert_eq!((&period).into_iter().count(), 4);
    }

    #[test]
    fn month_steps_drift_after_clamping() {
        let period = Period::new(datetime(2021, 1, 31).unwrap(), 3, Frequency::Months, 1).unwrap();
        let values: Vec<_> = period.iter().map(|v| ymd(&v)).collect();
        assert_eq!(values, vec![(2021, 1, 31), (2021, 2, 28), (2021, 3, 28)]);
    }

    #[test]
    fn spring_forward_gap_is_skipped() {
        // 02:00 does not exist in Vienna on 2021-03-28 and resolves onto
        // the same instant as 03:00.
        let start = ZonedInstant::new(2021, 3, 28, 0, 0, 0, 0, "Europe/Vienna").unwrap();
        let end = ZonedInstant::new(2021, 3, 28, 4, 0, 0, 0, "Europe/Vienna").unwrap();
        let period = Period::new(start, end, Frequency::Hours, 1).unwrap();
        let values = period.to_vec();
        let hours: Vec<u8> = values.iter().map(|v| v.hour()).collect();
        assert_eq!(hours, vec![0, 1, 2, 4]);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn comparison_by_duration() {
        let start = datetime(1975, 1, 1).unwrap();
        let days = Period::new(start, 8, Frequency::Days, 1).unwrap();
        let hours = Period::new(start, 7 * 24 + 1, Frequency::Hours, 1).unwrap();
        let month = Period::new(start, 2, Frequency::Months, 1).unwrap();
        assert_eq!(days, hours);
        assert!(days < month);
        assert!(month >= hours);
        assert_eq!(days.duration_seconds(), 7.0 * 86_400.0);
    }

    #[test]
    fn shift_keeps_frequency_and_count() {
        let period = Period::new(datetime(1975, 1, 1).unwrap(), 5, Frequency::Hours, 3).unwrap();
        let shifted = period.shift(&CalendarDelta::new().with_days(1)).unwrap();
        assert_eq!(shifted.frequency(), Frequency::Hours);
        assert_eq!(shifted.step(), 3);
        assert_eq!(shifted.len(), period.len());
        assert_eq!(shifted.count(), Some(5));
        assert_eq!(ymd(&shifted.start()), (1975, 1, 2));
    }
}
