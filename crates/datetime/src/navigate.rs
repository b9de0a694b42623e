//! Weekday and month navigation on [`ZonedInstant`].

use timeless_calendar::{CalendarDelta, Weekday, weekday_index};

use crate::error::DatetimeError;
use crate::instant::{Overrides, ZonedInstant};

impl ZonedInstant {
    /// Returns the weekday of this instant's civil date.
    pub fn weekday(&self) -> Weekday {
        self.timestamp().weekday()
    }

    /// Returns the next `weekday` strictly after this date, at midnight.
    ///
    /// The current day is never returned, even if it already is `weekday`.
    ///
    /// # Errors
    ///
    /// Returns a calendar error only if the result leaves the supported years.
    ///
    /// # Example
    ///
    /// ```
    /// use timeless_calendar::Weekday;
    /// use timeless_datetime::ZonedInstant;
    ///
    /// let dt = ZonedInstant::new(1994, 2, 26, 9, 0, 0, 0, "UTC").unwrap();
    /// let next = dt.get_next(Weekday::Friday).unwrap();
    /// assert_eq!((next.month(), next.day(), next.hour()), (3, 4, 0));
    /// ```
    pub fn get_next(&self, weekday: Weekday) -> Result<Self, DatetimeError> {
        let days = match self.weekday().days_until(weekday) {
            0 => 7,
            n => i64::from(n),
        };
        self.set_zero().add(&CalendarDelta::new().with_days(days))
    }

    /// Returns the previous `weekday` strictly before this date, at midnight.
    ///
    /// # Errors
    ///
    /// Returns a calendar error only if the result leaves the supported years.
    pub fn get_last(&self, weekday: Weekday) -> Result<Self, DatetimeError> {
        let days = match self.weekday().days_since(weekday) {
            0 => 7,
            n => i64::from(n),
        };
        self.set_zero().subtract(&CalendarDelta::new().with_days(days))
    }

    /// Returns the lowercase weekday name, computed through the index of the
    /// day within a week starting on `week_start`.
    pub fn get_weekday_name(&self, week_start: Weekday) -> &'static str {
        let index = weekday_index(self.year(), self.month(), self.day(), week_start);
        Weekday::from_monday_index(i64::from(index) + i64::from(week_start.number_from_monday()))
            .name()
    }

    /// Returns the first day of this month, time of day preserved.
    ///
    /// # Errors
    ///
    /// Never fails for an instant that was itself valid; the `Result` mirrors
    /// [`ZonedInstant::set`].
    pub fn get_month_start(&self) -> Result<Self, DatetimeError> {
        self.set(&Overrides::new().day(1))
    }

    /// Returns the last day of this month, time of day preserved.
    ///
    /// # Errors
    ///
    /// Same as [`ZonedInstant::get_month_start`].
    pub fn get_month_end(&self) -> Result<Self, DatetimeError> {
        self.set(&Overrides::new().day(self.days_in_month()))
    }

    /// Returns the first occurrence of `weekday` in this month, at midnight.
    ///
    /// `week_start` only affects how the first day's name is computed; the
    /// result is the same for every week start.
    ///
    /// # Errors
    ///
    /// Returns a calendar error only if the result leaves the supported years.
    pub fn get_first_weekday_in_month(
        &self,
        weekday: Weekday,
        week_start: Weekday,
    ) -> Result<Self, DatetimeError> {
        let first = self.get_month_start()?.set_zero();
        if first.get_weekday_name(week_start) == weekday.name() {
            return Ok(first);
        }
        let previous = first.get_last(weekday)?;
        if previous.month() == first.month() && previous.year() == first.year() {
            return Ok(previous);
        }
        first.get_next(weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u8, d: u8) -> ZonedInstant {
        ZonedInstant::new(y, m, d, 0, 0, 0, 0, "UTC").unwrap()
    }

    fn ymd(dt: &ZonedInstant) -> (i32, u8, u8) {
        (dt.year(), dt.month(), dt.day())
    }

    #[test]
    fn get_next_weekday() {
        let dt = utc(1994, 2, 26);
        assert_eq!(dt.weekday(), Weekday::Saturday);
        assert_eq!(ymd(&dt.get_next(Weekday::Friday).unwrap()), (1994, 3, 4));
        assert_eq!(ymd(&dt.get_next(Weekday::Sunday).unwrap()), (1994, 2, 27));
    }

    #[test]
    fn get_next_excludes_today() {
        let dt = utc(1994, 2, 26);
        assert_eq!(ymd(&dt.get_next(Weekday::Saturday).unwrap()), (1994, 3, 5));
    }

    #[test]
    fn get_last_weekday() {
        let dt = utc(1994, 2, 26);
        assert_eq!(ymd(&dt.get_last(Weekday::Friday).unwrap()), (1994, 2, 25));
        assert_eq!(ymd(&dt.get_last(Weekday::Saturday).unwrap()), (1994, 2, 19));
        assert_eq!(ymd(&dt.get_last(Weekday::Sunday).unwrap()), (1994, 2, 20));
    }

    #[test]
    fn navigation_zeroes_time() {
        let dt = ZonedInstant::new(1994, 2, 26, 17, 45, 3, 9, "Europe/Vienna").unwrap();
        let next = dt.get_next(Weekday::Monday).unwrap();
        assert_eq!((next.hour(), next.minute(), next.second()), (0, 0, 0));
        assert_eq!(next.zone_name(), "Europe/Vienna");
    }

    #[test]
    fn weekday_name_is_independent_of_week_start() {
        let dt = utc(1994, 2, 26);
        for start in [Weekday::Monday, Weekday::Sunday, Weekday::Wednesday] {
            assert_eq!(dt.get_weekday_name(start), "saturday");
        }
    }

    #[test]
    fn month_start_and_end_keep_time() {
        let dt = ZonedInstant::new(2024, 2, 14, 6, 30, 0, 0, "UTC").unwrap();
        let start = dt.get_month_start().unwrap();
        let end = dt.get_month_end().unwrap();
        assert_eq!((start.day(), start.hour(), start.minute()), (1, 6, 30));
        assert_eq!((end.day(), end.hour(), end.minute()), (29, 6, 30));
    }

    #[test]
    fn first_weekday_in_month() {
        // 1994-03-01 was a Tuesday.
        let dt = utc(1994, 3, 20);
        let tuesday = dt.get_first_weekday_in_month(Weekday::Tuesday, Weekday::Monday);
        assert_eq!(ymd(&tuesday.unwrap()), (1994, 3, 1));
        let monday = dt.get_first_weekday_in_month(Weekday::Monday, Weekday::Monday);
        assert_eq!(ymd(&monday.unwrap()), (1994, 3, 7));
        let friday = dt.get_first_weekday_in_month(Weekday::Friday, Weekday::Sunday);
        assert_eq!(ymd(&friday.unwrap()), (1994, 3, 4));
    }
}
