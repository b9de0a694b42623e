//! Month lengths, leap years and month/day overflow normalization.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Ordinal of the day before each month starts in a common year (index 1 = January).
const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// A year is a leap year when it is divisible by 4, except for century
/// years, which must also be divisible by 400.
///
/// ```
/// use timeless_calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCalendarValue`] if `month` is not in
/// `1..=12`.
///
/// ```
/// use timeless_calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert!(days_in_month(2024, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    check_month(month)?;
    Ok(month_length(year, month))
}

/// Month length for a month already known to be in `1..=12`.
pub(crate) fn month_length(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[usize::from(month)]
    }
}

fn check_month(month: u8) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidCalendarValue {
            field: "month",
            value: month.into(),
            min: 1,
            max: 12,
        })
    }
}

/// Folds a possibly out-of-range 1-based month count into a valid
/// `(year, month)` pair.
///
/// Months beyond December carry forward into later years; months at or
/// below zero borrow from earlier years. Floor division keeps the sign
/// handling correct, so `(1975, 0)` is December 1974 and `(1975, -12)` is
/// December 1973.
///
/// ```
/// use timeless_calendar::normalize_month_overflow;
///
/// assert_eq!(normalize_month_overflow(1975, 13), (1976, 1));
/// assert_eq!(normalize_month_overflow(1975, 0), (1974, 12));
/// assert_eq!(normalize_month_overflow(1975, -1), (1974, 11));
/// ```
pub fn normalize_month_overflow(year: i64, month_raw: i64) -> (i64, u8) {
    let zero_based = month_raw - 1;
    let year = year + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u8 + 1;
    (year, month)
}

/// Clamps `day` to the last valid day of `month` in `year`.
///
/// This is the end-of-month policy of calendar arithmetic: Jan 31 plus one
/// month lands on the last day of February instead of rolling into March.
///
/// ```
/// use timeless_calendar::clamp_day;
///
/// assert_eq!(clamp_day(2012, 2, 31).unwrap(), 29);
/// assert_eq!(clamp_day(2013, 2, 31).unwrap(), 28);
/// assert_eq!(clamp_day(2013, 3, 31).unwrap(), 31);
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCalendarValue`] if `month` is not in
/// `1..=12`.
pub fn clamp_day(year: i32, month: u8, day: u8) -> Result<u8, CalendarError> {
    Ok(day.min(days_in_month(year, month)?))
}

pub(crate) fn clamp_to_month(year: i32, month: u8, day: u8) -> u8 {
    day.min(month_length(year, month))
}

/// Returns the 1-based ordinal day of the year (1..=366).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCalendarValue`] for a month outside
/// `1..=12` and [`CalendarError::InvalidDay`] for a day outside the month.
pub fn day_of_year(year: i32, month: u8, day: u8) -> Result<u16, CalendarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            year,
            month,
            day,
            max_day,
        });
    }
    Ok(ordinal(year, month, day))
}

pub(crate) fn ordinal(year: i32, month: u8, day: u8) -> u16 {
    let leap_shift = u16::from(month > 2 && is_leap_year(year));
    DAYS_BEFORE_MONTH[usize::from(month)] + leap_shift + u16::from(day)
}
