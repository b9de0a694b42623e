//! Timestamp indexes: ordered epoch columns with an optional frequency.

use timeless_period::{Frequency, Period, PeriodPoints};
use tracing::{debug, warn};

use crate::epoch::{ExternalTimestamp, TimeUnit, from_external_timestamp, to_external_timestamp};
use crate::error::ConvertError;
use crate::token::{frequency_from_token, token_for};

/// An ordered column of epoch values, as held by a dataframe index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIndex {
    pub values: Vec<i64>,
    pub unit: TimeUnit,
    /// Zone of an aware index; `None` for a naive one.
    pub zone: Option<String>,
    /// Frequency token such as `"D"` or `"15min"`, when the index has one.
    pub freq: Option<String>,
}

/// Exports every element of `period` as an aware index in `unit`, tagged
/// with the period's frequency token.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfRange`] if a value overflows `unit`.
pub fn to_external_index(
    period: &Period,
    unit: TimeUnit,
) -> Result<ExternalIndex, ConvertError> {
    let values = period
        .iter()
        .map(|dt| to_external_timestamp(&dt, unit).map(|ts| ts.value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ExternalIndex {
        values,
        unit,
        zone: Some(period.start().zone_name().to_string()),
        freq: Some(token_for(period.frequency(), period.step())),
    })
}

/// Rebuilds a period spanning the earliest to the latest value of `index`.
///
/// A naive index is read as UTC. A missing or unsupported frequency falls
/// back to one day with a warning. A negative multiplier is applied as its
/// magnitude, since the period runs from the earliest value upward.
///
/// # Errors
///
/// Returns [`ConvertError::EmptyIndex`] for an index without values,
/// [`ConvertError::Period`] for a zero multiplier, and the errors of
/// [`from_external_timestamp`].
///
/// ```
/// use timeless_convert::{ExternalIndex, TimeUnit, from_external_index};
/// use timeless_period::Frequency;
///
/// let index = ExternalIndex {
///     values: vec![0, 3_600, 7_200],
///     unit: TimeUnit::Seconds,
///     zone: None,
///     freq: Some("H".to_string()),
/// };
/// let period = from_external_index(&index).unwrap();
/// assert_eq!(period.frequency(), Frequency::Hours);
/// assert_eq!(period.len(), 3);
/// ```
#[tracing::instrument(skip(index), fields(len = index.values.len(), freq = ?index.freq))]
pub fn from_external_index(index: &ExternalIndex) -> Result<Period, ConvertError> {
    let (Some(&min), Some(&max)) = (index.values.iter().min(), index.values.iter().max()) else {
        return Err(ConvertError::EmptyIndex);
    };

    let (frequency, step) = match &index.freq {
        Some(token) => frequency_from_token(token),
        None => {
            warn!("index has no frequency, assuming daily");
            frequency_from_token("D")
        }
    };
    if step < 0 {
        debug!(step, "using step magnitude for an ascending index");
    }
    let (frequency, step) = match step.checked_abs() {
        Some(step) => (frequency, step),
        None => {
            warn!(step, "step magnitude does not fit, assuming daily");
            (Frequency::Days, 1)
        }
    };

    let read = |value: i64| {
        let ts = ExternalTimestamp {
            value,
            unit: index.unit,
            zone: index.zone.clone(),
        };
        from_external_timestamp(&ts, "UTC")
    };
    Ok(Period::new(read(min)?, read(max)?, frequency, step)?)
}

/// Materializes an index into a duplicate-free point set, keeping its
/// order. Unlike [`from_external_index`] this keeps irregular spacing.
///
/// # Errors
///
/// Returns [`ConvertError::Period`] if the index repeats an instant, and
/// the errors of [`from_external_timestamp`].
pub fn points_from_external_index(index: &ExternalIndex) -> Result<PeriodPoints, ConvertError> {
    let mut points = PeriodPoints::new();
    for &value in &index.values {
        let ts = ExternalTimestamp {
            value,
            unit: index.unit,
            zone: index.zone.clone(),
        };
        points.append(from_external_timestamp(&ts, "UTC")?)?;
    }
    Ok(points)
}
