//! Error types for the timeless-calendar crate.

/// Error type for all fallible operations in the timeless-calendar crate.
///
/// Construction never clamps: an out-of-range field is always reported
/// back to the caller with the offending value and the accepted bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a calendar field lies outside its fixed bounds.
    #[error("invalid {field}: {value} (must be {min}..={max})")]
    InvalidCalendarValue {
        /// Name of the offending field (`"month"`, `"hour"`, ...).
        field: &'static str,
        /// The value that was provided.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Returned when a day number exceeds the length of its month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// Year of the date being validated.
        year: i32,
        /// Month of the date being validated.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// Number of days in that month.
        max_day: u8,
    },

    /// Returned when arithmetic produces a year outside the supported range.
    #[error("year {year} is outside the supported range -9999..=9999")]
    YearOutOfRange {
        /// The year the arithmetic would have produced.
        year: i64,
    },

    /// Returned when a weekday name is not one of `monday` through `sunday`.
    #[error("unknown weekday: {name:?}")]
    UnknownWeekday {
        /// The name that failed to match.
        name: String,
    },
}
