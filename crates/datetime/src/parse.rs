//! Reading instants from text.
//!
//! Parsing is split in two: a [`TextParser`] turns text into raw
//! [`ParsedFields`], and [`parse_with`] validates those fields and decides
//! which zone the resulting [`ZonedInstant`] carries. Two parsers ship with
//! the crate:
//!
//! | Parser | Accepts |
//! |--------|---------|
//! | [`NumericParser`] | `1975-01-01`, `1975-01-01 01`, `1975-01-01T01:30:00.5+02:00`, `01/02/1975`, `19750101`, a trailing `[Zone/Name]` |
//! | [`StrftimeParser`] | anything described by a `strftime` pattern |

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use timeless_calendar::CalendarTimestamp;

use crate::error::DatetimeError;
use crate::instant::ZonedInstant;
use crate::zone::Zone;

/// Field-order hints for ambiguous numeric dates such as `01/02/03`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseHints {
    /// Read `01/02/2021` as 1 February rather than 2 January.
    pub day_first: bool,
    /// Read the first component as the year.
    pub year_first: bool,
}

/// Raw fields produced by a [`TextParser`], not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
    /// UTC offset written in the text, in seconds east of UTC.
    pub offset_seconds: Option<i32>,
    /// Zone identifier written in the text.
    pub zone: Option<String>,
}

impl ParsedFields {
    fn date(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            microsecond: 0,
            offset_seconds: None,
            zone: None,
        }
    }

    fn timestamp(&self) -> Result<CalendarTimestamp, DatetimeError> {
        Ok(CalendarTimestamp::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.microsecond,
        )?)
    }
}

/// Turns text into [`ParsedFields`].
pub trait TextParser {
    /// Reads `text` into raw fields.
    ///
    /// # Errors
    ///
    /// Returns [`DatetimeError::Parse`] if the text is not understood.
    fn parse(&self, text: &str, hints: &ParseHints) -> Result<ParsedFields, DatetimeError>;
}

/// Options for [`crate::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    format: Option<String>,
    zone: Option<String>,
    default_zone: Option<String>,
    hints: ParseHints,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses with this `strftime` pattern instead of the numeric parser.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Labels the result with this zone, whatever the text says.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Labels the result with this zone when the text names neither a zone
    /// nor an offset. Without it such text is read as UTC.
    pub fn with_default_zone(mut self, zone: impl Into<String>) -> Self {
        self.default_zone = Some(zone.into());
        self
    }

    pub fn with_day_first(mut self, day_first: bool) -> Self {
        self.hints.day_first = day_first;
        self
    }

    pub fn with_year_first(mut self, year_first: bool) -> Self {
        self.hints.year_first = year_first;
        self
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub fn default_zone(&self) -> Option<&str> {
        self.default_zone.as_deref()
    }

    pub fn hints(&self) -> ParseHints {
        self.hints
    }
}

/// Parses `text` with `parser` and assigns a zone.
///
/// The zone is chosen in this order:
///
/// 1. the zone in `options`, which relabels the parsed civil time;
/// 2. a zone name written in the text;
/// 3. a written UTC offset: zero gives `UTC`, a whole number of hours gives
///    the matching fixed `Etc/GMT` zone, and any other offset is converted
///    to UTC;
/// 4. the default zone in `options`, or `UTC`.
///
/// # Errors
///
/// Returns the parser's error, a calendar error for out-of-range fields, or
/// [`DatetimeError::UnknownZone`] for an unresolvable zone.
pub fn parse_with<P>(
    parser: &P,
    text: &str,
    options: &ParseOptions,
) -> Result<ZonedInstant, DatetimeError>
where
    P: TextParser + ?Sized,
{
    let fields = parser.parse(text, &options.hints)?;
    let timestamp = fields.timestamp()?;

    if let Some(name) = options.zone() {
        return Ok(ZonedInstant::from_parts(timestamp, Zone::new(name)?));
    }
    if let Some(name) = &fields.zone {
        return Ok(ZonedInstant::from_parts(timestamp, Zone::new(name)?));
    }
    match fields.offset_seconds {
        None => {
            let zone = Zone::new(options.default_zone().unwrap_or("UTC"))?;
            Ok(ZonedInstant::from_parts(timestamp, zone))
        }
        Some(0) => Ok(ZonedInstant::from_parts(timestamp, Zone::UTC)),
        Some(seconds) => match fixed_hour_zone(seconds) {
            Some(zone) => Ok(ZonedInstant::from_parts(timestamp, zone)),
            None => {
                let utc = timestamp.to_epoch_micros() - i64::from(seconds) * 1_000_000;
                ZonedInstant::from_utc_micros(utc, Zone::UTC)
            }
        },
    }
}

/// Maps a whole-hour offset onto the `Etc/GMT` zone with that fixed offset.
/// The `Etc` names carry the inverted sign.
fn fixed_hour_zone(offset_seconds: i32) -> Option<Zone> {
    if offset_seconds % 3600 != 0 {
        return None;
    }
    let hours = offset_seconds / 3600;
    if !(-12..=14).contains(&hours) {
        return None;
    }
    Zone::new(&format!("Etc/GMT{:+}", -hours)).ok()
}

/// Reads numeric dates and times.
///
/// The date is three numbers separated by `-`, `/` or `.`, or eight digits
/// `YYYYMMDD`. A four-digit first component is always the year; otherwise
/// the [`ParseHints`] decide between month-day-year (the default),
/// day-month-year and year-month-day. An optional time follows after `T` or
/// whitespace as `HH[:MM[:SS[.ffffff]]]`, then an optional `Z`, `UTC` or
/// `+HH[:MM]` offset and an optional `[Zone/Name]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericParser;

impl TextParser for NumericParser {
    fn parse(&self, text: &str, hints: &ParseHints) -> Result<ParsedFields, DatetimeError> {
        let mut rest = text.trim();
        if rest.is_empty() {
            return Err(DatetimeError::parse(text, "empty input"));
        }

        let mut zone = None;
        if let Some(stripped) = rest.strip_suffix(']') {
            let open = stripped
                .rfind('[')
                .ok_or_else(|| DatetimeError::parse(text, "unbalanced zone bracket"))?;
            zone = Some(stripped[open + 1..].trim().to_string());
            rest = stripped[..open].trim_end();
        }

        let (date_part, time_part) =
            match rest.find(|c: char| c == 'T' || c == 't' || c.is_ascii_whitespace()) {
                Some(i) => (&rest[..i], rest[i + 1..].trim()),
                None => (rest, ""),
            };

        let (year, month, day) = parse_date(text, date_part, hints)?;
        let (clock, offset_seconds) = split_offset(text, time_part)?;
        let mut fields = ParsedFields::date(year, month, day);
        parse_clock(text, clock, &mut fields)?;
        fields.offset_seconds = offset_seconds;
        fields.zone = zone;
        Ok(fields)
    }
}

fn number<T: std::str::FromStr>(text: &str, part: &str, what: &str) -> Result<T, DatetimeError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DatetimeError::parse(text, format!("expected digits for {what}, found {part:?}")));
    }
    part.parse()
        .map_err(|_| DatetimeError::parse(text, format!("{what} {part} is out of range")))
}

fn parse_date(
    text: &str,
    date: &str,
    hints: &ParseHints,
) -> Result<(i32, u8, u8), DatetimeError> {
    let parts: Vec<&str> = date.split(['-', '/', '.']).collect();
    let (y, m, d) = match parts.as_slice() {
        [compact] if compact.len() == 8 && compact.is_ascii() => {
            (&compact[..4], &compact[4..6], &compact[6..])
        }
        [a, b, c] if a.len() >= 3 => (*a, *b, *c),
        [a, b, c] if hints.year_first && hints.day_first => (*a, *c, *b),
        [a, b, c] if hints.year_first => (*a, *b, *c),
        [a, b, c] if hints.day_first => (*c, *b, *a),
        [a, b, c] => (*c, *a, *b),
        _ => return Err(DatetimeError::parse(text, "expected year, month and day")),
    };
    Ok((number(text, y, "year")?, number(text, m, "month")?, number(text, d, "day")?))
}

fn split_offset<'a>(text: &str, time: &'a str) -> Result<(&'a str, Option<i32>), DatetimeError> {
    if let Some(clock) = time.strip_suffix(['Z', 'z']) {
        return Ok((clock.trim_end(), Some(0)));
    }
    if let Some(clock) = time.strip_suffix("UTC") {
        return Ok((clock.trim_end(), Some(0)));
    }
    let Some(sign_at) = time.rfind(['+', '-']) else {
        return Ok((time, None));
    };
    let (clock, offset) = time.split_at(sign_at);
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let digits: String = offset[1..].chars().filter(|c| *c != ':').collect();
    if !digits.is_ascii() {
        return Err(DatetimeError::parse(text, format!("malformed UTC offset {offset:?}")));
    }
    let (hh, mm) = match digits.len() {
        2 => (digits.as_str(), "00"),
        4 => digits.split_at(2),
        _ => return Err(DatetimeError::parse(text, format!("malformed UTC offset {offset:?}"))),
    };
    let hours: i32 = number(text, hh, "offset hours")?;
    let minutes: i32 = number(text, mm, "offset minutes")?;
    if hours > 23 || minutes > 59 {
        return Err(DatetimeError::parse(text, format!("UTC offset {offset:?} is out of range")));
    }
    Ok((clock.trim_end(), Some(sign * (hours * 3600 + minutes * 60))))
}

fn parse_clock(text: &str, clock: &str, fields: &mut ParsedFields) -> Result<(), DatetimeError> {
    if clock.is_empty() {
        return Ok(());
    }
    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() > 3 {
        return Err(DatetimeError::parse(text, "too many time components"));
    }
    fields.hour = number(text, parts[0], "hour")?;
    if let Some(minute) = parts.get(1) {
        fields.minute = number(text, minute, "minute")?;
    }
    if let Some(second) = parts.get(2) {
        let (whole, fraction) = match second.split_once(['.', ',']) {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (*second, None),
        };
        fields.second = number(text, whole, "second")?;
        if let Some(fraction) = fraction {
            let digits: String = fraction.chars().take(6).collect();
            let scale = 10u32.pow(6 - digits.len() as u32);
            fields.microsecond = number::<u32>(text, &digits, "fraction")? * scale;
        }
    }
    Ok(())
}

/// Reads text with a `strftime` pattern.
///
/// Patterns with `%z` produce an offset; patterns without a time produce
/// midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrftimeParser {
    pattern: String,
}

impl StrftimeParser {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl TextParser for StrftimeParser {
    fn parse(&self, text: &str, _hints: &ParseHints) -> Result<ParsedFields, DatetimeError> {
        if StrftimeItems::new(&self.pattern).any(|item| matches!(item, Item::Error)) {
            return Err(DatetimeError::InvalidFormat {
                pattern: self.pattern.clone(),
            });
        }
        if let Ok(dt) = DateTime::parse_from_str(text, &self.pattern) {
            let mut fields = fields_from_naive(&dt.naive_local());
            fields.offset_seconds = Some(dt.offset().local_minus_utc());
            return Ok(fields);
        }
        match NaiveDateTime::parse_from_str(text, &self.pattern) {
            Ok(naive) => Ok(fields_from_naive(&naive)),
            Err(_) => NaiveDate::parse_from_str(text, &self.pattern)
                .map(|date| fields_from_naive(&date.and_time(NaiveTime::MIN)))
                .map_err(|e| DatetimeError::parse(text, e.to_string())),
        }
    }
}

fn fields_from_naive(naive: &NaiveDateTime) -> ParsedFields {
    ParsedFields {
        year: naive.year(),
        month: naive.month() as u8,
        day: naive.day() as u8,
        hour: naive.hour() as u8,
        minute: naive.minute() as u8,
        second: naive.second() as u8,
        // Leap seconds are folded into the last microsecond.
        microsecond: (naive.nanosecond() / 1_000).min(999_999),
        offset_seconds: None,
        zone: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(text: &str) -> ZonedInstant {
        parse_with(&NumericParser, text, &ParseOptions::new()).unwrap()
    }

    fn fields(dt: &ZonedInstant) -> (i32, u8, u8, u8, u8, u8, u32) {
        (
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.microsecond(),
        )
    }

    #[test]
    fn date_and_hour_only() {
        let dt = numeric("1975-01-01 01");
        assert_eq!(fields(&dt), (1975, 1, 1, 1, 0, 0, 0));
        assert_eq!(dt.zone_name(), "UTC");
    }

    #[test]
    fn full_iso_with_fraction() {
        let dt = numeric("2021-06-01T14:05:09.25");
        assert_eq!(fields(&dt), (2021, 6, 1, 14, 5, 9, 250_000));
    }

    #[test]
    fn compact_date() {
        assert_eq!(fields(&numeric("19940226")), (1994, 2, 26, 0, 0, 0, 0));
    }

    #[test]
    fn zulu_is_utc() {
        let dt = numeric("2021-06-01T14:00:00Z");
        assert_eq!(dt.zone_name(), "UTC");
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn whole_hour_offset_gets_fixed_zone() {
        let dt = numeric("2021-06-01T14:00:00+02:00");
        assert_eq!(dt.zone_name(), "Etc/GMT-2");
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt, numeric("2021-06-01T12:00:00Z"));
    }

    #[test]
    fn fractional_offset_converts_to_utc() {
        let dt = numeric("2021-01-01T10:00+05:30");
        assert_eq!(dt.zone_name(), "UTC");
        assert_eq!((dt.hour(), dt.minute()), (4, 30));
    }

    #[test]
    fn bracketed_zone() {
        let dt = numeric("2021-06-01 14:00 [Europe/Paris]");
        assert_eq!(dt.zone_name(), "Europe/Paris");
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn slash_dates_follow_hints() {
        assert_eq!(numeric("01/02/2021").month(), 1);
        let options = ParseOptions::new().with_day_first(true);
        let dt = parse_with(&NumericParser, "01/02/2021", &options).unwrap();
        assert_eq!((dt.month(), dt.day()), (2, 1));
        let options = ParseOptions::new().with_year_first(true);
        let dt = parse_with(&NumericParser, "21/02/03", &options).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (21, 2, 3));
    }

    #[test]
    fn explicit_zone_relabels() {
        let options = ParseOptions::new().with_zone("America/Sao_Paulo");
        let dt = parse_with(&NumericParser, "1975-01-01 15+02:00", &options).unwrap();
        assert_eq!(dt.zone_name(), "America/Sao_Paulo");
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn default_zone_only_fills_in() {
        let options = ParseOptions::new().with_default_zone("Asia/Tokyo");
        let plain = parse_with(&NumericParser, "1975-01-01 15", &options).unwrap();
        assert_eq!(plain.zone_name(), "Asia/Tokyo");
        let zulu = parse_with(&NumericParser, "1975-01-01 15Z", &options).unwrap();
        assert_eq!(zulu.zone_name(), "UTC");
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_with(&NumericParser, "hello", &ParseOptions::new()).unwrap_err();
        assert!(matches!(err, DatetimeError::Parse { .. }));
    }

    #[test]
    fn multibyte_text_is_a_parse_error() {
        for text in ["123é567", "12345é78", "1975-01-01 01+aéb", "1975-01-01 01-é1"] {
            let err = parse_with(&NumericParser, text, &ParseOptions::new()).unwrap_err();
            assert!(matches!(err, DatetimeError::Parse { .. }), "{text}");
        }
    }

        #[test]
    fn impossible_date_is_a_calendar_error() {
        let err = parse_with(&NumericParser, "2021-02-30", &ParseOptions::new()).unwrap_err();
        assert!(matches!(err, DatetimeError::Calendar(_)));
    }

    #[test]
    fn unknown_bracket_zone() {
        let err = parse_with(&NumericParser, "2021-02-03 [Nowhere/City]", &ParseOptions::new())
            .unwrap_err();
        assert!(matches!(err, DatetimeError::UnknownZone { .. }));
    }

    #[test]
    fn strftime_pattern() {
        let parser = StrftimeParser::new("%d.%m.%Y %H:%M");
        let dt = parse_with(&parser, "26.02.1994 08:05", &ParseOptions::new()).unwrap();
        assert_eq!(fields(&dt), (1994, 2, 26, 8, 5, 0, 0));
    }

    #[test]
    fn strftime_date_only() {
        let parser = StrftimeParser::new("%d.%m.%Y");
        let dt = parse_with(&parser, "26.02.1994", &ParseOptions::new()).unwrap();
        assert_eq!(fields(&dt), (1994, 2, 26, 0, 0, 0, 0));
    }

    #[test]
    fn strftime_with_offset() {
        let parser = StrftimeParser::new("%Y-%m-%d %H:%M %z");
        let dt = parse_with(&parser, "2021-06-01 14:00 -0300", &ParseOptions::new()).unwrap();
        assert_eq!(dt.zone_name(), "Etc/GMT+3");
        assert_eq!(dt.convert_to("UTC").unwrap().hour(), 17);
    }

    #[test]
    fn strftime_mismatch() {
        let parser = StrftimeParser::new("%d.%m.%Y");
        let err = parse_with(&parser, "1994-02-26", &ParseOptions::new()).unwrap_err();
        assert!(matches!(err, DatetimeError::Parse { .. }));
    }
}
