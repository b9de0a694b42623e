//! Zone resolution backed by the compiled-in IANA database.
//!
//! A [`Zone`] is a validated zone identifier. It resolves civil timestamps
//! to UTC offsets on demand, so the offset always reflects the daylight
//! saving rules in force at that particular moment.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use timeless_calendar::CalendarTimestamp;
use tracing::debug;

use crate::error::DatetimeError;

/// A UTC offset in seconds east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset { seconds: 0 };

    pub fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// Returns the offset in seconds.
    pub fn seconds(self) -> i32 {
        self.seconds
    }

    /// Returns the offset in fractional hours (`-3.0`, `5.5`, ...).
    pub fn hours(self) -> f64 {
        f64::from(self.seconds) / 3600.0
    }

    pub(crate) fn micros(self) -> i64 {
        i64::from(self.seconds) * 1_000_000
    }
}

impl fmt::Display for UtcOffset {
    /// Formats as `+HH:MM`, or `+HH:MM:SS` when seconds are present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 3600, abs % 3600 / 60)?;
        if abs % 60 != 0 {
            write!(f, ":{:02}", abs % 60)?;
        }
        Ok(())
    }
}

/// A validated IANA zone identifier, such as `"UTC"` or `"Europe/Vienna"`.
///
/// Lookups go to a static, read-only database, so a `Zone` is `Copy` and
/// safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct Zone(Tz);

impl Zone {
    pub const UTC: Zone = Zone(Tz::UTC);

    /// Resolves a zone identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DatetimeError::UnknownZone`] if `name` is not in the database.
    pub fn new(name: &str) -> Result<Self, DatetimeError> {
        name.parse::<Tz>()
            .map(Zone)
            .map_err(|_| DatetimeError::UnknownZone {
                name: name.to_string(),
            })
    }

    /// Returns the canonical identifier.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the underlying `chrono-tz` zone, for interop with `chrono`.
    pub fn tz(&self) -> Tz {
        self.0
    }

    /// Wraps a `chrono-tz` zone.
    pub fn from_tz(tz: Tz) -> Self {
        Zone(tz)
    }

    /// Returns the offset in force at the given civil time in this zone.
    ///
    /// Ambiguous times (the repeated hour when clocks go back) resolve to
    /// the earlier instant. Times skipped when clocks go forward take the
    /// offset that was in force before the transition.
    pub fn offset_at(&self, timestamp: &CalendarTimestamp) -> UtcOffset {
        let local = naive_from_epoch_micros(timestamp.to_epoch_micros());
        let offset = match self.0.offset_from_local_datetime(&local).earliest() {
            Some(offset) => offset,
            None => {
                debug!(zone = self.name(), %timestamp, "civil time falls in a zone gap");
                let before = local - TimeDelta::days(1);
                self.0
                    .offset_from_local_datetime(&before)
                    .earliest()
                    .unwrap_or_else(|| self.0.offset_from_utc_datetime(&local))
            }
        };
        UtcOffset::from_seconds(offset.fix().local_minus_utc())
    }

    /// Returns the offset in force at an absolute instant.
    ///
    /// Instants beyond chrono's representable range get a zero offset.
    pub fn offset_at_utc(&self, utc_micros: i64) -> UtcOffset {
        let Some(utc) = DateTime::from_timestamp_micros(utc_micros) else {
            return UtcOffset::UTC;
        };
        let offset = self.0.offset_from_utc_datetime(&utc.naive_utc());
        UtcOffset::from_seconds(offset.fix().local_minus_utc())
    }

    /// Returns the civil time in this zone at an absolute instant.
    ///
    /// # Errors
    ///
    /// Returns a calendar error if the local time leaves the supported years.
    pub fn civil_at_utc(&self, utc_micros: i64) -> Result<CalendarTimestamp, DatetimeError> {
        let local = utc_micros.saturating_add(self.offset_at_utc(utc_micros).micros());
        Ok(CalendarTimestamp::from_epoch_micros(local)?)
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Zone {}

impl Hash for Zone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::UTC
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves `name` and returns its offset at `timestamp`.
///
/// # Errors
///
/// Returns [`DatetimeError::UnknownZone`] if `name` is not in the database.
pub fn resolve(name: &str, timestamp: &CalendarTimestamp) -> Result<UtcOffset, DatetimeError> {
    Ok(Zone::new(name)?.offset_at(timestamp))
}

/// Wall-clock microseconds since the Unix epoch, read from the system clock.
pub(crate) fn system_now_micros() -> i64 {
    Utc::now().timestamp_micros()
}

fn naive_from_epoch_micros(micros: i64) -> NaiveDateTime {
    // Callers pass validated timestamps, whose years sit far inside chrono's
    // range, so this cannot overflow.
    DateTime::<Utc>::default().naive_utc() + TimeDelta::microseconds(micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u8, d: u8, h: u8, mi: u8) -> CalendarTimestamp {
        CalendarTimestamp::new(y, m, d, h, mi, 0, 0).unwrap()
    }

    #[test]
    fn utc_resolves() {
        let zone = Zone::new("UTC").unwrap();
        assert_eq!(zone.name(), "UTC");
        assert_eq!(zone.offset_at(&ts(2000, 1, 1, 0, 0)), UtcOffset::UTC);
    }

    #[test]
    fn unknown_zone_is_an_error() {
        assert_eq!(
            Zone::new("Atlantis/Capital").unwrap_err(),
            DatetimeError::UnknownZone {
                name: "Atlantis/Capital".to_string()
            }
        );
    }

    #[test]
    fn dst_changes_offset() {
        let zone = Zone::new("Europe/Vienna").unwrap();
        assert_eq!(zone.offset_at(&ts(2021, 1, 15, 12, 0)).seconds(), 3600);
        assert_eq!(zone.offset_at(&ts(2021, 7, 15, 12, 0)).seconds(), 7200);
    }

    #[test]
    fn sao_paulo_in_1975() {
        let zone = Zone::new("America/Sao_Paulo").unwrap();
        assert_eq!(zone.offset_at(&ts(1975, 1, 1, 15, 0)).hours(), -3.0);
    }

    #[test]
    fn ambiguous_time_takes_earlier_instant() {
        // Clocks in Vienna went from 03:00 CEST back to 02:00 CET on 2021-10-31.
        let zone = Zone::new("Europe/Vienna").unwrap();
        assert_eq!(zone.offset_at(&ts(2021, 10, 31, 2, 30)).seconds(), 7200);
    }

    #[test]
    fn gap_time_takes_offset_before_transition() {
        // Clocks in Vienna jumped from 02:00 CET to 03:00 CEST on 2021-03-28.
        let zone = Zone::new("Europe/Vienna").unwrap();
        assert_eq!(zone.offset_at(&ts(2021, 3, 28, 2, 30)).seconds(), 3600);
    }

    #[test]
    fn civil_at_utc_applies_offset() {
        let zone = Zone::new("America/Sao_Paulo").unwrap();
        let utc = ts(1975, 1, 1, 18, 0).to_epoch_micros();
        assert_eq!(zone.civil_at_utc(utc).unwrap(), ts(1975, 1, 1, 15, 0));
    }

    #[test]
    fn resolve_function() {
        let offset = resolve("Asia/Kolkata", &ts(2020, 6, 1, 0, 0)).unwrap();
        assert_eq!(offset.seconds(), 19_800);
        assert_eq!(offset.to_string(), "+05:30");
        assert!(resolve("Nope/Nowhere", &ts(2020, 6, 1, 0, 0)).is_err());
    }

    #[test]
    fn offset_display() {
        assert_eq!(UtcOffset::from_seconds(-10_800).to_string(), "-03:00");
        assert_eq!(UtcOffset::UTC.to_string(), "+00:00");
    }

    #[test]
    fn zone_equality_by_name() {
        assert_eq!(Zone::new("UTC").unwrap(), Zone::UTC);
        assert_ne!(Zone::new("Europe/Paris").unwrap(), Zone::UTC);
    }
}
