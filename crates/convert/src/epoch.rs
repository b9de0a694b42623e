//! Epoch timestamps as exchanged with array and dataframe libraries.

use std::fmt;

use timeless_datetime::{DatetimeError, Zone, ZonedInstant};
use tracing::debug;

use crate::error::ConvertError;

/// Resolution of an epoch value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    #[default]
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Converts a value in this unit to microseconds, `None` on overflow.
    /// Nanoseconds are floored to the microsecond.
    pub fn to_micros(self, value: i64) -> Option<i64> {
        match self {
            TimeUnit::Seconds => value.checked_mul(1_000_000),
            TimeUnit::Milliseconds => value.checked_mul(1_000),
            TimeUnit::Microseconds => Some(value),
            TimeUnit::Nanoseconds => Some(value.div_euclid(1_000)),
        }
    }

    /// Converts microseconds to this unit, `None` on overflow. Coarser
    /// units floor.
    pub fn from_micros(self, micros: i64) -> Option<i64> {
        match self {
            TimeUnit::Seconds => Some(micros.div_euclid(1_000_000)),
            TimeUnit::Milliseconds => Some(micros.div_euclid(1_000)),
            TimeUnit::Microseconds => Some(micros),
            TimeUnit::Nanoseconds => micros.checked_mul(1_000),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Nanoseconds => "nanoseconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An epoch value with its unit and, for zone-aware values, its zone.
///
/// With a zone, `value` counts from the Unix epoch in UTC and the zone only
/// says how to display it. Without one, `value` encodes a wall-clock time
/// as if it were UTC, the way naive datetime columns do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTimestamp {
    pub value: i64,
    pub unit: TimeUnit,
    pub zone: Option<String>,
}

impl ExternalTimestamp {
    /// Creates a zone-aware timestamp.
    pub fn aware(value: i64, unit: TimeUnit, zone: impl Into<String>) -> Self {
        Self {
            value,
            unit,
            zone: Some(zone.into()),
        }
    }

    /// Creates a naive timestamp.
    pub fn naive(value: i64, unit: TimeUnit) -> Self {
        Self {
            value,
            unit,
            zone: None,
        }
    }

    fn micros(&self) -> Result<i64, ConvertError> {
        self.unit
            .to_micros(self.value)
            .ok_or(ConvertError::OutOfRange {
                value: self.value,
                unit: self.unit,
            })
    }
}

/// Exports an instant as a zone-aware epoch value in `unit`.
///
/// The value is the absolute instant, so converting back yields an instant
/// equal to `dt` (exactly, for microseconds or nanoseconds).
///
/// # Errors
///
/// Returns [`ConvertError::OutOfRange`] if the value overflows `unit`.
///
/// ```
/// use timeless_convert::{TimeUnit, to_external_timestamp};
/// use timeless_datetime::ZonedInstant;
///
/// let dt = ZonedInstant::new(1970, 1, 1, 1, 0, 0, 0, "Europe/Vienna").unwrap();
/// let ts = to_external_timestamp(&dt, TimeUnit::Seconds).unwrap();
/// assert_eq!(ts.value, 0);
/// assert_eq!(ts.zone.as_deref(), Some("Europe/Vienna"));
/// ```
pub fn to_external_timestamp(
    dt: &ZonedInstant,
    unit: TimeUnit,
) -> Result<ExternalTimestamp, ConvertError> {
    let micros = dt.to_utc_micros();
    let value = unit.from_micros(micros).ok_or(ConvertError::OutOfRange {
        value: micros,
        unit: TimeUnit::Microseconds,
    })?;
    Ok(ExternalTimestamp::aware(value, unit, dt.zone_name()))
}

/// Imports an epoch value.
///
/// A zone-aware value keeps its absolute instant and is expressed in its
/// own zone. A naive value has its wall-clock fields labelled with
/// `default_zone`.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfRange`] if the value leaves the supported
/// years and [`ConvertError::Datetime`] for an unknown zone.
#[tracing::instrument(skip(ts), fields(value = ts.value, unit = %ts.unit))]
pub fn from_external_timestamp(
    ts: &ExternalTimestamp,
    default_zone: &str,
) -> Result<ZonedInstant, ConvertError> {
    let micros = ts.micros()?;
    let out_of_range = |_: DatetimeError| ConvertError::OutOfRange {
        value: ts.value,
        unit: ts.unit,
    };
    match &ts.zone {
        Some(name) => {
            let zone = Zone::new(name)?;
            ZonedInstant::from_utc_micros(micros, zone).map_err(out_of_range)
        }
        None => {
            debug!(zone = default_zone, "localizing naive timestamp");
            let zone = Zone::new(default_zone)?;
            let wall = ZonedInstant::from_utc_micros(micros, Zone::UTC).map_err(out_of_range)?;
            Ok(wall.with_zone(zone))
        }
    }
}
