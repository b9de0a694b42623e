//! Conversions between proleptic Gregorian dates and days since 1970-01-01.
//!
//! These back the fixed-duration half of calendar arithmetic: once the
//! month/year part of a delta is applied, days and clock units are added
//! on a flat day count and converted back.

/// Returns the number of days from 1970-01-01 to the given date.
///
/// Negative for dates before the epoch. The date is assumed valid.
pub fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let month = i64::from(month);
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Returns the `(year, month, day)` that lies `days` after 1970-01-01.
///
/// The returned year is an `i64` so callers can range-check it before
/// narrowing.
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    let month = month as u8;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::month_length;

    #[test]
    fn epoch_is_zero() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn known_dates() {
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
    }

    #[test]
    fn roundtrip_every_day_across_four_centuries() {
        let mut expected = days_from_civil(1800, 1, 1);
        for year in 1800..=2200 {
            for month in 1..=12 {
                for day in 1..=month_length(year, month) {
                    let n = days_from_civil(year, month, day);
                    assert_eq!(n, expected, "gap before {year}-{month}-{day}");
                    assert_eq!(civil_from_days(n), (i64::from(year), month, day));
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn roundtrip_range_extremes() {
        for (y, m, d) in [(-9999, 1, 1), (9999, 12, 31), (0, 2, 29), (-1, 12, 31)] {
            let n = days_from_civil(y, m, d);
            assert_eq!(civil_from_days(n), (i64::from(y), m, d));
        }
    }
}
