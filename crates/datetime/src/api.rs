//! Free construction functions.

use crate::error::DatetimeError;
use crate::instant::ZonedInstant;
use crate::parse::{NumericParser, ParseOptions, StrftimeParser, parse_with};

/// Returns midnight UTC on the given date.
///
/// Use [`ZonedInstant::new`] to give a time of day or another zone.
///
/// # Errors
///
/// Returns a calendar error if the date is invalid.
pub fn datetime(year: i32, month: u8, day: u8) -> Result<ZonedInstant, DatetimeError> {
    ZonedInstant::new(year, month, day, 0, 0, 0, 0, "UTC")
}

/// Returns the current time in `zone`.
///
/// # Errors
///
/// Returns [`DatetimeError::UnknownZone`] if the zone cannot be resolved.
pub fn now(zone: &str) -> Result<ZonedInstant, DatetimeError> {
    ZonedInstant::now(zone)
}

/// Returns today's date in `zone` at midnight.
///
/// # Errors
///
/// Returns [`DatetimeError::UnknownZone`] if the zone cannot be resolved.
pub fn today(zone: &str) -> Result<ZonedInstant, DatetimeError> {
    ZonedInstant::today(zone)
}

/// Parses `text` into an instant.
///
/// Without a format the [`NumericParser`] reads the text; with one, the
/// [`StrftimeParser`] does. See [`parse_with`] for how the zone is chosen.
///
/// # Errors
///
/// Returns [`DatetimeError::Parse`] for unreadable text,
/// [`DatetimeError::InvalidFormat`] for a malformed pattern, a calendar error
/// for impossible fields, and [`DatetimeError::UnknownZone`] for an unknown
/// zone.
///
/// # Example
///
/// ```
/// use timeless_datetime::{ParseOptions, parse};
///
/// let dt = parse("1975-01-01 01", &ParseOptions::new()).unwrap();
/// assert_eq!((dt.year(), dt.hour()), (1975, 1));
/// assert_eq!(dt.zone_name(), "UTC");
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> Result<ZonedInstant, DatetimeError> {
    match options.format() {
        Some(pattern) => parse_with(&StrftimeParser::new(pattern), text, options),
        None => parse_with(&NumericParser, text, options),
    }
}
