//! The zoned instant: a civil timestamp labelled with a zone.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use timeless_calendar::{CalendarDelta, CalendarTimestamp};

use crate::error::DatetimeError;
use crate::zone::{UtcOffset, Zone, system_now_micros};

/// An immutable civil timestamp interpreted in a named zone.
///
/// The UTC offset is not stored; it is resolved from the zone whenever it
/// is needed, so instants on either side of a daylight-saving transition
/// carry the right offset. Every operation that looks like a mutation
/// returns a new value.
///
/// Equality, ordering and hashing use the absolute instant: the same
/// moment expressed in two different zones compares equal.
///
/// # Example
///
/// ```
/// use timeless_datetime::ZonedInstant;
///
/// let paris = ZonedInstant::new(2021, 6, 1, 14, 0, 0, 0, "Europe/Paris").unwrap();
/// let utc = ZonedInstant::new(2021, 6, 1, 12, 0, 0, 0, "UTC").unwrap();
/// assert_eq!(paris, utc);
/// assert_eq!(paris.hour(), 14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ZonedInstant {
    timestamp: CalendarTimestamp,
    zone: Zone,
}

/// Field replacements for [`ZonedInstant::set`].
///
/// Unset fields keep the current value. Leaving the zone unset keeps the
/// current zone, which is different from asking for `"UTC"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    microsecond: Option<u32>,
    zone: Option<String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    pub fn day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    pub fn hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(mut self, second: u8) -> Self {
        self.second = Some(second);
        self
    }

    pub fn microsecond(mut self, microsecond: u32) -> Self {
        self.microsecond = Some(microsecond);
        self
    }

    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Replaces the whole time of day with midnight.
    pub fn midnight(self) -> Self {
        self.hour(0).minute(0).second(0).microsecond(0)
    }
}

impl ZonedInstant {
    /// Creates an instant from civil fields and a zone identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DatetimeError::Calendar`] if a field is out of range (a day
    /// past the end of its month included) and [`DatetimeError::UnknownZone`]
    /// if the zone cannot be resolved.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
        zone: &str,
    ) -> Result<Self, DatetimeError> {
        let zone = Zone::new(zone)?;
        let timestamp = CalendarTimestamp::new(year, month, day, hour, minute, second, microsecond)?;
        Ok(Self { timestamp, zone })
    }

    /// Pairs an already-validated timestamp with a zone.
    pub fn from_parts(timestamp: CalendarTimestamp, zone: Zone) -> Self {
        Self { timestamp, zone }
    }

    /// Creates the instant `utc_micros` microseconds after the Unix epoch,
    /// expressed as civil time in `zone`.
    ///
    /// # Errors
    ///
    /// Returns a calendar error if the local time leaves the supported years.
    pub fn from_utc_micros(utc_micros: i64, zone: Zone) -> Result<Self, DatetimeError> {
        let timestamp = zone.civil_at_utc(utc_micros)?;
        Ok(Self { timestamp, zone })
    }

    /// Returns the current time in `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`DatetimeError::UnknownZone`] if the zone cannot be resolved.
    pub fn now(zone: &str) -> Result<Self, DatetimeError> {
        Self::from_utc_micros(system_now_micros(), Zone::new(zone)?)
    }

    /// Returns the current date in `zone` at midnight.
    ///
    /// # Errors
    ///
    /// Returns [`DatetimeError::UnknownZone`] if the zone cannot be resolved.
    pub fn today(zone: &str) -> Result<Self, DatetimeError> {
        Ok(Self::now(zone)?.set_zero())
    }

    pub fn timestamp(&self) -> CalendarTimestamp {
        self.timestamp
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Returns the zone identifier, e.g. `"UTC"`.
    pub fn zone_name(&self) -> &'static str {
        self.zone.name()
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    pub fn month(&self) -> u8 {
        self.timestamp.month()
    }

    pub fn day(&self) -> u8 {
        self.timestamp.day()
    }

    pub fn hour(&self) -> u8 {
        self.timestamp.hour()
    }

    pub fn minute(&self) -> u8 {
        self.timestamp.minute()
    }

    pub fn second(&self) -> u8 {
        self.timestamp.second()
    }

    pub fn microsecond(&self) -> u32 {
        self.timestamp.microsecond()
    }

    /// Returns the UTC offset this instant's zone has at its civil time.
    pub fn utc_offset(&self) -> UtcOffset {
        self.zone.offset_at(&self.timestamp)
    }

    /// Returns the absolute instant as microseconds since the Unix epoch.
    pub fn to_utc_micros(&self) -> i64 {
        self.timestamp.to_epoch_micros() - self.utc_offset().micros()
    }

    /// Returns a copy with the given fields replaced.
    ///
    /// # Errors
    ///
    /// Fails like [`ZonedInstant::new`] when the combined fields are invalid
    /// or the zone override cannot be resolved.
    ///
    /// # Example
    ///
    /// ```
    /// use timeless_datetime::{Overrides, ZonedInstant};
    ///
    /// let dt = ZonedInstant::new(1975, 1, 1, 0, 0, 0, 0, "UTC").unwrap();
    /// let moved = dt.set(&Overrides::new().year(1976).zone("Europe/Vienna")).unwrap();
    /// assert_eq!(moved.year(), 1976);
    /// assert_eq!(moved.zone_name(), "Europe/Vienna");
    /// ```
    pub fn set(&self, overrides: &Overrides) -> Result<Self, DatetimeError> {
        let zone = match &overrides.zone {
            Some(name) => Zone::new(name)?,
            None => self.zone,
        };
        let ts = &self.timestamp;
        let timestamp = CalendarTimestamp::new(
            overrides.year.unwrap_or(ts.year()),
            overrides.month.unwrap_or(ts.month()),
            overrides.day.unwrap_or(ts.day()),
            overrides.hour.unwrap_or(ts.hour()),
            overrides.minute.unwrap_or(ts.minute()),
            overrides.second.unwrap_or(ts.second()),
            overrides.microsecond.unwrap_or(ts.microsecond()),
        )?;
        Ok(Self { timestamp, zone })
    }

    /// Returns the same date at midnight, zone unchanged.
    pub fn set_zero(&self) -> Self {
        Self {
            timestamp: self.timestamp.start_of_day(),
            zone: self.zone,
        }
    }

    /// Relabels the civil time with another zone.
    ///
    /// The civil fields stay numerically identical, so the absolute instant
    /// changes. Use [`ZonedInstant::convert_to`] to keep the instant instead.
    ///
    /// # Errors
    ///
    /// Returns [`DatetimeError::UnknownZone`] if the zone cannot be resolved.
    pub fn set_zone(&self, zone: &str) -> Result<Self, DatetimeError> {
        Ok(self.with_zone(Zone::new(zone)?))
    }

    /// Relabels the civil time with an already-resolved zone.
    pub fn with_zone(&self, zone: Zone) -> Self {
        Self {
            timestamp: self.timestamp,
            zone,
        }
    }

    /// Relabels the civil time as UTC.
    pub fn set_utc(&self) -> Self {
        self.with_zone(Zone::UTC)
    }

    /// Expresses the same absolute instant as civil time in another zone.
    ///
    /// # Errors
    ///
    /// Returns [`DatetimeError::UnknownZone`] if the zone cannot be resolved.
    ///
    /// ```
    /// use timeless_datetime::ZonedInstant;
    ///
    /// let dt = ZonedInstant::new(1975, 1, 1, 15, 0, 0, 0, "America/Sao_Paulo").unwrap();
    /// let utc = dt.convert_to("UTC").unwrap();
    /// assert_eq!(utc.hour(), 18);
    /// assert_eq!(utc, dt);
    /// ```
    pub fn convert_to(&self, zone: &str) -> Result<Self, DatetimeError> {
        self.convert_to_zone(Zone::new(zone)?)
    }

    /// Like [`ZonedInstant::convert_to`] with an already-resolved zone.
    ///
    /// # Errors
    ///
    /// Returns a calendar error if the local time leaves the supported years.
    pub fn convert_to_zone(&self, zone: Zone) -> Result<Self, DatetimeError> {
        Self::from_utc_micros(self.to_utc_micros(), zone)
    }

    /// Returns this instant shifted by a calendar-relative delta.
    ///
    /// The delta is applied to the civil fields and the zone is kept, so a
    /// change of UTC offset across the shift is not compensated: one day
    /// after 12:00 is 12:00 the next day even over a DST transition.
    ///
    /// # Errors
    ///
    /// Returns a calendar error only if the result leaves the supported years.
    pub fn add(&self, delta: &CalendarDelta) -> Result<Self, DatetimeError> {
        Ok(Self {
            timestamp: self.timestamp.checked_add(delta)?,
            zone: self.zone,
        })
    }

    /// Returns this instant shifted back by `delta`.
    ///
    /// # Errors
    ///
    /// Same as [`ZonedInstant::add`].
    pub fn subtract(&self, delta: &CalendarDelta) -> Result<Self, DatetimeError> {
        self.add(&-*delta)
    }

    /// Returns the calendar-relative delta from `self` to `other`.
    ///
    /// `other` is first expressed in this instant's zone, so
    /// `a.add(&a.diff(&b)?)? == b` holds.
    ///
    /// # Errors
    ///
    /// Returns a calendar error if `other` cannot be expressed in this zone
    /// within the supported years.
    pub fn diff(&self, other: &ZonedInstant) -> Result<CalendarDelta, DatetimeError> {
        let target = if other.zone == self.zone {
            other.timestamp
        } else {
            self.zone.civil_at_utc(other.to_utc_micros())?
        };
        Ok(self.timestamp.until(&target))
    }

    /// Returns `true` if this instant lies after the current time.
    pub fn is_future(&self) -> bool {
        self.to_utc_micros() > system_now_micros()
    }

    /// Returns `true` if this instant lies before the current time.
    pub fn is_past(&self) -> bool {
        self.to_utc_micros() < system_now_micros()
    }

    /// Returns the number of days in this instant's month.
    pub fn days_in_month(&self) -> u8 {
        self.timestamp.days_in_month()
    }

    /// Returns `true` if this instant's year is a leap year.
    pub fn is_leap(&self) -> bool {
        self.timestamp.is_leap_year()
    }
}

impl PartialEq for ZonedInstant {
    fn eq(&self, other: &Self) -> bool {
        self.to_utc_micros() == other.to_utc_micros()
    }
}

impl Eq for ZonedInstant {}

impl PartialOrd for ZonedInstant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZonedInstant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_utc_micros().cmp(&other.to_utc_micros())
    }
}

impl Hash for ZonedInstant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_utc_micros().hash(state);
    }
}
