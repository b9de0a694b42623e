//! Rendering instants as text.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, NaiveDate};

use crate::error::DatetimeError;
use crate::instant::ZonedInstant;

/// Types that render themselves as text, ISO-8601 by default.
pub trait Formattable {
    /// Renders `self` with a `strftime`-style `pattern`, or as ISO-8601
    /// when `pattern` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DatetimeError::InvalidFormat`] if the pattern is malformed.
    fn format(&self, pattern: Option<&str>) -> Result<String, DatetimeError>;
}

impl ZonedInstant {
    /// Renders the instant as ISO-8601 with its UTC offset, e.g.
    /// `2021-06-01T14:00:00+02:00`. Microseconds appear only when non-zero.
    pub fn to_iso(&self) -> String {
        format!("{}{}", self.timestamp(), self.utc_offset())
    }
}

impl Formattable for ZonedInstant {
    /// Patterns use `strftime` syntax (`%Y-%m-%d %H:%M`, `%Z` for the
    /// offset, ...).
    ///
    /// ```
    /// use timeless_datetime::{Formattable, ZonedInstant};
    ///
    /// let dt = ZonedInstant::new(1975, 1, 1, 15, 0, 0, 0, "America/Sao_Paulo").unwrap();
    /// assert_eq!(dt.format(None).unwrap(), "1975-01-01T15:00:00-03:00");
    /// assert_eq!(dt.format(Some("%d.%m.%Y %H:%M")).unwrap(), "01.01.1975 15:00");
    /// ```
    fn format(&self, pattern: Option<&str>) -> Result<String, DatetimeError> {
        let Some(pattern) = pattern else {
            return Ok(self.to_iso());
        };
        let invalid = || DatetimeError::InvalidFormat {
            pattern: pattern.to_string(),
        };

        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }

        let ts = self.timestamp();
        let offset = FixedOffset::east_opt(self.utc_offset().seconds()).ok_or_else(invalid)?;
        let local = NaiveDate::from_ymd_opt(ts.year(), u32::from(ts.month()), u32::from(ts.day()))
            .and_then(|date| {
                date.and_hms_micro_opt(
                    u32::from(ts.hour()),
                    u32::from(ts.minute()),
                    u32::from(ts.second()),
                    ts.microsecond(),
                )
            })
            .and_then(|naive| naive.and_local_timezone(offset).single())
            .ok_or_else(invalid)?;

        let mut out = String::new();
        write!(out, "{}", local.format_with_items(items.into_iter())).map_err(|_| invalid())?;
        Ok(out)
    }
}

impl fmt::Display for ZonedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}
