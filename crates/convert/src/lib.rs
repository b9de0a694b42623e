//! # timeless-convert
//!
//! Converters between timeless values and the representations used at
//! system boundaries: epoch timestamps, dataframe-style indexes with
//! frequency tokens, and `chrono` datetimes.
//!
//! Every conversion of an aware value goes through UTC, so the absolute
//! instant survives a round trip. Naive values are labelled with a zone
//! without shifting their wall-clock fields.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ZonedInstant"] <-->|"to/from_external_timestamp()"| B["ExternalTimestamp"]
//!     C["Period"] <-->|"to/from_external_index()"| D["ExternalIndex"]
//!     D -->|"frequency_from_token()"| E["Frequency, step"]
//!     A <-->|"to_chrono() / from_chrono()"| F["chrono::DateTime"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `epoch` | Epoch units and single timestamps |
//! | `index` | Timestamp indexes and periods |
//! | `token` | Frequency token mapping |
//! | `chrono_conv` | `chrono` interop |
//! | `error` | Error types |

mod chrono_conv;
mod epoch;
mod error;
mod index;
mod token;

pub use chrono_conv::{from_chrono, from_chrono_tz, from_naive, to_chrono};
pub use epoch::{ExternalTimestamp, TimeUnit, from_external_timestamp, to_external_timestamp};
pub use error::ConvertError;
pub use index::{ExternalIndex, from_external_index, points_from_external_index, to_external_index};
pub use token::{frequency_from_token, split_token, token_for, try_frequency_from_token};

/// Tracing target of this crate's events, for log filters.
pub const LOG_TARGET: &str = module_path!();
