//! A materialized, duplicate-free set of instants.

use timeless_datetime::ZonedInstant;

use crate::error::PeriodError;
use crate::period::Period;

/// An ordered list of distinct instants that can be edited after
/// generation.
///
/// Instants are compared by absolute time, so the same moment in two zones
/// counts as a duplicate.
///
/// # Example
///
/// ```
/// use timeless_datetime::datetime;
/// use timeless_period::{Frequency, Period, PeriodError, PeriodPoints};
///
/// let period = Period::new(datetime(1975, 1, 1).unwrap(), 2, Frequency::Days, 1).unwrap();
/// let mut points = PeriodPoints::from_period(&period);
/// points.append(datetime(1975, 1, 5).unwrap()).unwrap();
/// assert_eq!(points.len(), 3);
///
/// let err = points.append(datetime(1975, 1, 2).unwrap()).unwrap_err();
/// assert!(matches!(err, PeriodError::DuplicateValue { .. }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodPoints {
    values: Vec<ZonedInstant>,
}

impl PeriodPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materializes every element of `period`.
    pub fn from_period(period: &Period) -> Self {
        Self {
            values: period.to_vec(),
        }
    }

    /// Builds a point set from arbitrary values.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::DuplicateValue`] for the first repeated value.
    pub fn from_values(
        values: impl IntoIterator<Item = ZonedInstant>,
    ) -> Result<Self, PeriodError> {
        let mut points = Self::new();
        for value in values {
            points.append(value)?;
        }
        Ok(points)
    }

    /// Adds `value` at the end.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::DuplicateValue`] if `value` is already present.
    pub fn append(&mut self, value: ZonedInstant) -> Result<(), PeriodError> {
        self.reject_duplicate(&value)?;
        self.values.push(value);
        Ok(())
    }

    /// Adds `value` at `index`, shifting later values right. An index past
    /// the end appends.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::DuplicateValue`] if `value` is already present.
    pub fn insert(&mut self, index: usize, value: ZonedInstant) -> Result<(), PeriodError> {
        self.reject_duplicate(&value)?;
        let index = index.min(self.values.len());
        self.values.insert(index, value);
        Ok(())
    }

    fn reject_duplicate(&self, value: &ZonedInstant) -> Result<(), PeriodError> {
        if self.contains(value) {
            return Err(PeriodError::DuplicateValue { value: *value });
        }
        Ok(())
    }

    pub fn contains(&self, value: &ZonedInstant) -> bool {
        self.values.contains(value)
    }

    /// Returns the earliest instant.
    pub fn start(&self) -> Option<ZonedInstant> {
        self.values.iter().min().copied()
    }

    /// Returns the latest instant.
    pub fn end(&self) -> Option<ZonedInstant> {
        self.values.iter().max().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ZonedInstant> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[ZonedInstant] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<ZonedInstant> {
        self.values
    }
}

impl<'a> IntoIterator for &'a PeriodPoints {
    type Item = &'a ZonedInstant;
    type IntoIter = std::slice::Iter<'a, ZonedInstant>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Frequency;
    use timeless_datetime::datetime;

    #[test]
    fn insert_at_front_moves_start() {
        let period = Period::new(datetime(1975, 1, 2).unwrap(), 2, Frequency::Days, 1).unwrap();
        let mut points = PeriodPoints::from_period(&period);
        points.insert(0, datetime(1975, 1, 1).unwrap()).unwrap();
        assert_eq!(points.start().unwrap().day(), 1);
        assert_eq!(points.end().unwrap().day(), 3);
        assert_eq!(points.as_slice()[0].day(), 1);
    }

    #[test]
    fn insert_rejects_duplicate() {
        let mut points = PeriodPoints::from_values([datetime(1975, 1, 1).unwrap()]).unwrap();
        let err = points.insert(0, datetime(1975, 1, 1).unwrap()).unwrap_err();
        assert!(matches!(err, PeriodError::DuplicateValue { .. }));
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn duplicate_across_zones() {
        let utc = timeless_datetime::ZonedInstant::new(1975, 1, 1, 18, 0, 0, 0, "UTC").unwrap();
        let sao_paulo = utc.convert_to("America/Sao_Paulo").unwrap();
        let mut points = PeriodPoints::new();
        points.append(utc).unwrap();
        assert!(points.append(sao_paulo).is_err());
    }

    #[test]
    fn from_values_rejects_repeats() {
        let day = datetime(1975, 1, 1).unwrap();
        assert!(PeriodPoints::from_values([day, day]).is_err());
    }

    #[test]
    fn empty_has_no_bounds() {
        let points = PeriodPoints::new();
        assert!(points.is_empty());
        assert_eq!(points.start(), None);
        assert_eq!(points.end(), None);
    }

    #[test]
    fn index_past_end_appends() {
        let mut points = PeriodPoints::new();
        points.insert(10, datetime(1975, 1, 1).unwrap()).unwrap();
        points.insert(10, datetime(1975, 1, 2).unwrap()).unwrap();
        let days: Vec<u8> = points.iter().map(|v| v.day()).collect();
        assert_eq!(days, vec![1, 2]);
    }
}
