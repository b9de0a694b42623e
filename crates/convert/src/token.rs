//! Frequency tokens used by dataframe indexes (`"D"`, `"3H"`, `"MS"`, ...).

use timeless_period::Frequency;
use tracing::warn;

use crate::error::ConvertError;

/// Tokens that map onto a calendar frequency. Business-day, quarter,
/// semi-month, millisecond and nanosecond tokens have no counterpart.
const TOKENS: [(&str, Frequency); 14] = [
    ("D", Frequency::Days),
    ("W", Frequency::Weeks),
    ("M", Frequency::Months),
    ("MS", Frequency::Months),
    ("A", Frequency::Years),
    ("Y", Frequency::Years),
    ("AS", Frequency::Years),
    ("YS", Frequency::Years),
    ("H", Frequency::Hours),
    ("T", Frequency::Minutes),
    ("min", Frequency::Minutes),
    ("S", Frequency::Seconds),
    ("U", Frequency::Microseconds),
    ("US", Frequency::Microseconds),
];

/// Splits a leading signed multiplier off a token: `"3H"` is `(3, "H")`,
/// `"H"` is `(1, "H")`. Anchors such as `"W-SUN"` keep only the base.
pub fn split_token(token: &str) -> (i64, &str) {
    let token = token.trim();
    let digits_end = token
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(token.len(), |(i, _)| i);
    let base = &token[digits_end..];
    let base = base.split_once('-').map_or(base, |(head, _)| head);
    let multiplier = match &token[..digits_end] {
        "" | "+" => 1,
        "-" => -1,
        digits => digits.parse().unwrap_or(1),
    };
    (multiplier, base)
}

/// Maps a frequency token to a frequency and step.
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedFrequencyToken`] if the base token has
/// no calendar counterpart.
///
/// ```
/// use timeless_convert::try_frequency_from_token;
/// use timeless_period::Frequency;
///
/// assert_eq!(try_frequency_from_token("15min").unwrap(), (Frequency::Minutes, 15));
/// assert!(try_frequency_from_token("BQ").is_err());
/// ```
pub fn try_frequency_from_token(token: &str) -> Result<(Frequency, i64), ConvertError> {
    let (step, base) = split_token(token);
    TOKENS
        .iter()
        .find(|(name, _)| *name == base)
        .map(|&(_, frequency)| (frequency, step))
        .ok_or_else(|| ConvertError::UnsupportedFrequencyToken {
            token: token.to_string(),
        })
}

/// Maps a frequency token to a frequency and step, falling back to one day
/// with a warning when the token is unsupported.
pub fn frequency_from_token(token: &str) -> (Frequency, i64) {
    match try_frequency_from_token(token) {
        Ok(mapped) => mapped,
        Err(e) => {
            warn!(error = %e, "assuming a daily frequency");
            (Frequency::Days, 1)
        }
    }
}

/// Returns the token for `step` units of `frequency`, e.g. `"2D"`.
pub fn token_for(frequency: Frequency, step: i64) -> String {
    let base = match frequency {
        Frequency::Years => "YS",
        Frequency::Months => "MS",
        Frequency::Weeks => "W",
        Frequency::Days => "D",
        Frequency::Hours => "H",
        Frequency::Minutes => "min",
        Frequency::Seconds => "S",
        Frequency::Microseconds => "U",
    };
    if step == 1 {
        base.to_string()
    } else {
        format!("{step}{base}")
    }
}
