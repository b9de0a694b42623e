//! # timeless-calendar
//!
//! Pure proleptic Gregorian calendar arithmetic, independent of time zones.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month_raw)"] -->|"normalize_month_overflow()"| B["(year, month)"]
//!     B -->|"clamp_day()"| C["day"]
//!     D["CalendarTimestamp"] -->|".checked_add(CalendarDelta)"| D
//!     D -->|".until()"| E["CalendarDelta"]
//!     D -->|".weekday()"| F["Weekday"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use timeless_calendar::{CalendarDelta, CalendarTimestamp, Weekday, is_leap_year};
//!
//! assert!(is_leap_year(2012));
//!
//! let ts = CalendarTimestamp::date(2012, 1, 31).unwrap();
//! let next = ts.checked_add(&CalendarDelta::new().with_months(1)).unwrap();
//! assert_eq!((next.month(), next.day()), (2, 29));
//! assert_eq!(next.weekday(), Weekday::Wednesday);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Leap years, month lengths, month overflow and day clamping |
//! | `epoch` | Date to day-count conversions |
//! | `weekday` | Weekday enum and week-start-relative indices |
//! | `timestamp` | Validated civil timestamp |
//! | `delta` | Calendar-relative delta |
//! | `arith` | Delta application and calendar diff |
//! | `units` | Fixed unit conversions |
//! | `error` | Error types |

mod arith;
mod delta;
mod epoch;
mod error;
mod month;
mod timestamp;
pub mod units;
mod weekday;

pub use delta::CalendarDelta;
pub use epoch::{civil_from_days, days_from_civil};
pub use error::CalendarError;
pub use month::{clamp_day, day_of_year, days_in_month, is_leap_year, normalize_month_overflow};
pub use timestamp::{CalendarTimestamp, MAX_YEAR, MIN_YEAR};
pub use weekday::{Weekday, weekday_index, weekday_of};
