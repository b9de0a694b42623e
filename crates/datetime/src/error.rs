//! Error types for the timeless-datetime crate.

use timeless_calendar::CalendarError;

/// Error type for all fallible operations in the timeless-datetime crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatetimeError {
    /// Returned when a zone identifier is not in the time zone database.
    #[error("unknown time zone: {name:?}")]
    UnknownZone {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// Returned when a format pattern contains an unrecognized directive.
    #[error("invalid format pattern: {pattern:?}")]
    InvalidFormat {
        /// The offending pattern.
        pattern: String,
    },

    /// Returned when text cannot be read as a datetime.
    #[error("cannot parse {text:?}: {reason}")]
    Parse {
        /// The input text.
        text: String,
        /// What went wrong.
        reason: String,
    },

    /// Calendar validation or arithmetic error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl DatetimeError {
    pub(crate) fn parse(text: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
