//! # timeless-datetime
//!
//! Immutable, zone-aware datetime values built on
//! [`timeless_calendar`] arithmetic and the IANA zone database.
//!
//! A [`ZonedInstant`] is a civil timestamp plus a zone. The UTC offset is
//! never stored; it is looked up for the civil time whenever it matters, so
//! values on both sides of a daylight-saving change stay correct.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["text"] -->|"parse()"| B["ZonedInstant"]
//!     C["fields + zone"] -->|"ZonedInstant::new()"| B
//!     B -->|".add(CalendarDelta)"| B
//!     B -->|".set_zone() relabel"| B
//!     B -->|".convert_to() same instant"| B
//!     B -->|".format()"| D["text"]
//!     B -->|".utc_offset()"| E["Zone resolver"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use timeless_calendar::{CalendarDelta, Weekday};
//! use timeless_datetime::{Formattable, ZonedInstant, datetime};
//!
//! let dt = datetime(2012, 1, 31).unwrap();
//! let next = dt.add(&CalendarDelta::new().with_months(1)).unwrap();
//! assert_eq!(next.format(Some("%Y-%m-%d")).unwrap(), "2012-02-29");
//!
//! let friday = datetime(1994, 2, 26).unwrap().get_next(Weekday::Friday).unwrap();
//! assert_eq!(friday.day(), 4);
//!
//! let vienna = ZonedInstant::new(2021, 7, 1, 12, 0, 0, 0, "Europe/Vienna").unwrap();
//! assert_eq!(vienna.utc_offset().seconds(), 7200);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `zone` | Zone lookup and UTC offsets |
//! | `instant` | `ZonedInstant`, field overrides, arithmetic |
//! | `navigate` | Weekday and month navigation |
//! | `format` | ISO-8601 and `strftime` rendering |
//! | `parse` | Text parsers and zone assignment |
//! | `api` | `datetime`, `now`, `today`, `parse` |
//! | `error` | Error types |

mod api;
mod error;
mod format;
mod instant;
mod navigate;
mod parse;
mod zone;

pub use api::{datetime, now, parse, today};
pub use error::DatetimeError;
pub use format::Formattable;
pub use instant::{Overrides, ZonedInstant};
pub use parse::{
    NumericParser, ParseHints, ParseOptions, ParsedFields, StrftimeParser, TextParser, parse_with,
};
pub use zone::{UtcOffset, Zone, resolve};

/// Tracing target of this crate's events, for log filters.
pub const LOG_TARGET: &str = module_path!();
