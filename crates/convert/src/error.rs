//! Error types for the timeless-convert crate.

use timeless_datetime::DatetimeError;
use timeless_period::PeriodError;

use crate::epoch::TimeUnit;

/// Error type for all fallible operations in the timeless-convert crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Returned by the strict token mapper when a frequency token has no
    /// calendar counterpart.
    #[error("unsupported frequency token: {token:?}")]
    UnsupportedFrequencyToken {
        /// The token as given.
        token: String,
    },

    /// Returned when an index holds no values.
    #[error("index is empty")]
    EmptyIndex,

    /// Returned when an epoch value does not fit the supported range.
    #[error("epoch value {value} {unit} is out of range")]
    OutOfRange {
        /// The epoch value.
        value: i64,
        /// Its unit.
        unit: TimeUnit,
    },

    /// Datetime error.
    #[error(transparent)]
    Datetime(#[from] DatetimeError),

    /// Period error.
    #[error(transparent)]
    Period(#[from] PeriodError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsupported_token() {
        let e = ConvertError::UnsupportedFrequencyToken {
            token: "BQ".to_string(),
        };
        assert_eq!(e.to_string(), "unsupported frequency token: \"BQ\"");
    }

    #[test]
    fn display_out_of_range() {
        let e = ConvertError::OutOfRange {
            value: i64::MAX,
            unit: TimeUnit::Seconds,
        };
        assert_eq!(
            e.to_string(),
            format!("epoch value {} seconds is out of range", i64::MAX)
        );
    }

    #[test]
    fn from_period_error() {
        let e: ConvertError = PeriodError::ZeroStep.into();
        assert!(matches!(e, ConvertError::Period(PeriodError::ZeroStep)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConvertError>();
    }
}
