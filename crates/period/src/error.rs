//! Error types for the timeless-period crate.

use timeless_datetime::{DatetimeError, ZonedInstant};

/// Error type for all fallible operations in the timeless-period crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Returned when the end lies on the wrong side of the start for the
    /// direction of the step.
    #[error("invalid range: {end} is {side} {start} but the step is {step}")]
    InvalidRange {
        /// First instant of the period.
        start: ZonedInstant,
        /// Resolved last instant of the period.
        end: ZonedInstant,
        /// The step that was requested.
        step: i64,
        /// `"before"` or `"after"`.
        side: &'static str,
    },

    /// Returned when an instant is inserted into a point set that already
    /// holds the same absolute instant.
    #[error("duplicate value: {value} is already present")]
    DuplicateValue {
        /// The rejected instant.
        value: ZonedInstant,
    },

    /// Returned when a period is built with a step of zero.
    #[error("step must be non-zero")]
    ZeroStep,

    /// Returned when a count-based period is asked for zero elements.
    #[error("count must be at least 1")]
    ZeroCount,

    /// Returned when a frequency name is not recognised.
    #[error("unknown frequency: {name:?}")]
    UnknownFrequency {
        /// The unrecognised name.
        name: String,
    },

    /// Datetime error.
    #[error(transparent)]
    Datetime(#[from] DatetimeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeless_datetime::datetime;

    #[test]
    fn display_invalid_range() {
        let e = PeriodError::InvalidRange {
            start: datetime(1975, 1, 3).unwrap(),
            end: datetime(1975, 1, 1).unwrap(),
            step: 1,
            side: "before",
        };
        assert_eq!(
            e.to_string(),
            "invalid range: 1975-01-01T00:00:00+00:00 is before 1975-01-03T00:00:00+00:00 \
             but the step is 1"
        );
    }

    #[test]
    fn display_duplicate_value() {
        let e = PeriodError::DuplicateValue {
            value: datetime(1975, 1, 1).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "duplicate value: 1975-01-01T00:00:00+00:00 is already present"
        );
    }

    #[test]
    fn display_zero_step() {
        assert_eq!(PeriodError::ZeroStep.to_string(), "step must be non-zero");
    }

    #[test]
    fn display_unknown_frequency() {
        let e = PeriodError::UnknownFrequency {
            name: "fortnights".to_string(),
        };
        assert_eq!(e.to_string(), "unknown frequency: \"fortnights\"");
    }

    #[test]
    fn from_datetime_error() {
        let de = DatetimeError::UnknownZone {
            name: "X".to_string(),
        };
        let pe: PeriodError = de.into();
        assert!(matches!(pe, PeriodError::Datetime(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PeriodError>();
    }
}
