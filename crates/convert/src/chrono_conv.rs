//! Interop with `chrono` datetime values.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;
use timeless_calendar::CalendarTimestamp;
use timeless_datetime::{Zone, ZonedInstant};

use crate::epoch::TimeUnit;
use crate::error::ConvertError;

/// Converts to a `chrono` datetime in the same zone, same absolute instant.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfRange`] if `chrono` cannot represent the
/// instant.
pub fn to_chrono(dt: &ZonedInstant) -> Result<DateTime<Tz>, ConvertError> {
    let micros = dt.to_utc_micros();
    let utc = DateTime::from_timestamp_micros(micros).ok_or(ConvertError::OutOfRange {
        value: micros,
        unit: TimeUnit::Microseconds,
    })?;
    Ok(utc.with_timezone(&dt.zone().tz()))
}

/// Converts a `chrono` datetime in any zone to an instant in `zone`,
/// keeping the absolute instant.
///
/// # Errors
///
/// Returns [`ConvertError::Datetime`] for an unknown zone or an instant
/// outside the supported years.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timeless_convert::from_chrono;
///
/// let utc = Utc.with_ymd_and_hms(1975, 1, 1, 18, 0, 0).unwrap();
/// let dt = from_chrono(&utc, "America/Sao_Paulo").unwrap();
/// assert_eq!(dt.hour(), 15);
/// ```
pub fn from_chrono<T: TimeZone>(
    dt: &DateTime<T>,
    zone: &str,
) -> Result<ZonedInstant, ConvertError> {
    Ok(ZonedInstant::from_utc_micros(dt.timestamp_micros(), Zone::new(zone)?)?)
}

/// Converts a `chrono-tz` datetime, keeping its own zone.
///
/// # Errors
///
/// Returns [`ConvertError::Datetime`] for an instant outside the supported
/// years.
pub fn from_chrono_tz(dt: &DateTime<Tz>) -> Result<ZonedInstant, ConvertError> {
    Ok(ZonedInstant::from_utc_micros(dt.timestamp_micros(), Zone::from_tz(dt.timezone()))?)
}

/// Labels a naive `chrono` datetime with `zone`, `"UTC"` when `None`. The
/// wall-clock fields are kept as they are.
///
/// # Errors
///
/// Returns [`ConvertError::Datetime`] for an unknown zone or a year outside
/// the supported range.
pub fn from_naive(
    naive: &NaiveDateTime,
    zone: Option<&str>,
) -> Result<ZonedInstant, ConvertError> {
    let zone = Zone::new(zone.unwrap_or("UTC"))?;
    let timestamp = CalendarTimestamp::new(
        naive.year(),
        naive.month() as u8,
        naive.day() as u8,
        naive.hour() as u8,
        naive.minute() as u8,
        naive.second() as u8,
        (naive.nanosecond() / 1_000).min(999_999),
    )
    .map_err(timeless_datetime::DatetimeError::from)?;
    Ok(ZonedInstant::from_parts(timestamp, zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn to_chrono_keeps_zone_and_instant() {
        let dt = ZonedInstant::new(2021, 7, 1, 12, 30, 0, 5, "Europe/Vienna").unwrap();
        let chrono_dt = to_chrono(&dt).unwrap();
        assert_eq!(chrono_dt.timezone(), chrono_tz::Europe::Vienna);
        assert_eq!((chrono_dt.hour(), chrono_dt.minute()), (12, 30));
        assert_eq!(chrono_dt.timestamp_micros(), dt.to_utc_micros());
    }

    #[test]
    fn chrono_tz_round_trip() {
        let dt = ZonedInstant::new(1975, 1, 1, 15, 0, 0, 0, "America/Sao_Paulo").unwrap();
        let back = from_chrono_tz(&to_chrono(&dt).unwrap()).unwrap();
        assert_eq!(back, dt);
        assert_eq!(back.zone_name(), "America/Sao_Paulo");
        assert_eq!(back.hour(), 15);
    }

    #[test]
    fn from_chrono_converts() {
        let utc = Utc.with_ymd_and_hms(1975, 1, 1, 18, 0, 0).unwrap();
        let dt = from_chrono(&utc, "America/Sao_Paulo").unwrap();
        assert_eq!(dt.hour(), 15);
        assert_eq!(dt.zone_name(), "America/Sao_Paulo");
    }

    #[test]
    fn from_naive_relabels() {
        let naive = NaiveDate::from_ymd_opt(1975, 1, 1)
            .unwrap()
            .and_hms_micro_opt(15, 0, 0, 42)
            .unwrap();
        let dt = from_naive(&naive, Some("America/Sao_Paulo")).unwrap();
        assert_eq!((dt.hour(), dt.microsecond()), (15, 42));
        assert_eq!(dt.zone_name(), "America/Sao_Paulo");
        assert_eq!(from_naive(&naive, None).unwrap().zone_name(), "UTC");
    }

    #[test]
    fn from_naive_rejects_far_years() {
        let naive = NaiveDate::from_ymd_opt(12_000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(from_naive(&naive, None), Err(ConvertError::Datetime(_))));
    }
}
