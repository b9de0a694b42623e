//! # timeless-period
//!
//! Inclusive, evenly spaced sequences of [`ZonedInstant`]s.
//!
//! A [`Period`] is a start, an end (or a count), a [`Frequency`] and a
//! non-zero step. Its elements are generated lazily and afresh on each
//! iteration; they are strictly monotonic and never repeat.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["start, end | count"] -->|"Period::new()"| B["Period"]
//!     B -->|".iter()"| C["ZonedInstant stream"]
//!     B -->|".shift(delta)"| B
//!     B -->|"PeriodPoints::from_period()"| D["PeriodPoints"]
//!     E["reference day"] -->|"week_of() / month_of()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use timeless_calendar::CalendarDelta;
//! use timeless_datetime::datetime;
//! use timeless_period::{Frequency, Period};
//!
//! let period = Period::new(datetime(1975, 1, 1).unwrap(), 3, Frequency::Days, 1).unwrap();
//! assert_eq!(period.len(), 3);
//!
//! let later = period.shift(&CalendarDelta::new().with_months(1)).unwrap();
//! assert_eq!(later.start().month(), 2);
//! assert_eq!(later, period);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `frequency` | Step units and their names |
//! | `period` | `Period`, its iterator, shift and duration ordering |
//! | `points` | Editable duplicate-free point sets |
//! | `span` | Week and month spans |
//! | `error` | Error types |

mod error;
mod frequency;
mod period;
mod points;
mod span;

pub use error::PeriodError;
pub use frequency::Frequency;
pub use period::{Period, PeriodEnd, PeriodIter};
pub use points::PeriodPoints;
pub use span::{SpanOptions, current_month, current_week, month_of, week_of};

#[doc(no_inline)]
pub use timeless_datetime::ZonedInstant;

/// Tracing target of this crate's events, for log filters.
pub const LOG_TARGET: &str = module_path!();
