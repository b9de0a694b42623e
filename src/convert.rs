//! Pure conversion functions: CLI and TOML strings -> crate API types.

use anyhow::{Context, Result, bail};

use timeless_calendar::{CalendarDelta, Weekday};
use timeless_convert::{TimeUnit, to_external_timestamp};
use timeless_datetime::{Formattable, ParseOptions, ZonedInstant, parse};
use timeless_period::{Frequency, SpanOptions};

use crate::cli::{EpochUnit, OutputArgs};
use crate::config::TimelessConfig;

/// Parses a frequency name such as `"day"` or `"Hours"`.
pub fn parse_frequency(s: &str) -> Result<Frequency> {
    match s.parse::<Frequency>() {
        Ok(frequency) => Ok(frequency),
        Err(_) => bail!("unknown frequency: {s:?}"),
    }
}

/// Parses a weekday name such as `"monday"` or `"Sun"`.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.parse::<Weekday>() {
        Ok(weekday) => Ok(weekday),
        Err(_) => bail!("unknown weekday: {s:?}"),
    }
}

/// Parses a delta written as comma-separated `N unit` terms, e.g.
/// `"1 month, -2 days"`. Repeated units add up.
pub fn parse_delta(s: &str) -> Result<CalendarDelta> {
    let mut delta = CalendarDelta::new();
    let mut terms = 0;
    for term in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let mut words = term.split_whitespace();
        let (Some(amount), Some(unit), None) = (words.next(), words.next(), words.next()) else {
            bail!("delta term must be \"<amount> <unit>\", got {term:?}");
        };
        let amount: i64 = amount
            .parse()
            .with_context(|| format!("invalid amount in delta term {term:?}"))?;
        delta = delta + parse_frequency(unit)?.delta(amount);
        terms += 1;
    }
    if terms == 0 {
        bail!("empty delta: {s:?}");
    }
    Ok(delta)
}

/// Resolves the zone for inputs without one: CLI flag, then config.
pub fn input_zone<'a>(output: &'a OutputArgs, config: &'a TimelessConfig) -> &'a str {
    output.zone.as_deref().unwrap_or(&config.defaults.zone)
}

/// Resolves the output pattern: CLI flag, then config. Empty means ISO-8601.
pub fn output_pattern<'a>(
    output: &'a OutputArgs,
    config: &'a TimelessConfig,
) -> Option<&'a str> {
    let pattern = output.format.as_deref().unwrap_or(&config.defaults.format);
    (!pattern.is_empty()).then_some(pattern)
}

/// Maps the `--epoch` choice onto a converter unit.
pub fn time_unit(unit: EpochUnit) -> TimeUnit {
    match unit {
        EpochUnit::S => TimeUnit::Seconds,
        EpochUnit::Ms => TimeUnit::Milliseconds,
        EpochUnit::Us => TimeUnit::Microseconds,
        EpochUnit::Ns => TimeUnit::Nanoseconds,
    }
}

/// Renders one output line: an epoch value when `--epoch` is set, otherwise
/// the formatted datetime.
pub fn render(
    value: &ZonedInstant,
    output: &OutputArgs,
    config: &TimelessConfig,
) -> Result<String> {
    if let Some(unit) = output.epoch {
        let ts = to_external_timestamp(value, time_unit(unit))
            .with_context(|| format!("cannot express {value} as an epoch value"))?;
        return Ok(ts.value.to_string());
    }
    Ok(value.format(output_pattern(output, config))?)
}

/// Parses a datetime argument, labelling zone-less text with `zone`.
pub fn parse_instant(text: &str, zone: &str) -> Result<ZonedInstant> {
    let options = ParseOptions::new().with_default_zone(zone);
    parse(text, &options).with_context(|| format!("invalid datetime: {text:?}"))
}

/// Builds span options from CLI overrides and the `[period]` config.
pub fn build_span_options(
    frequency: Option<&str>,
    step: Option<i64>,
    config: &TimelessConfig,
) -> Result<SpanOptions> {
    let frequency = parse_frequency(frequency.unwrap_or(&config.period.frequency))?;
    Ok(SpanOptions::new()
        .with_frequency(frequency)
        .with_step(step.unwrap_or(config.period.step)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_terms() {
        let delta = parse_delta("1 month, -2 days").unwrap();
        assert_eq!(delta, CalendarDelta::new().with_months(1).with_days(-2));
    }

    #[test]
    fn delta_units_accumulate() {
        let delta = parse_delta("1 week, 2 days, 3 hour").unwrap();
        assert_eq!(delta, CalendarDelta::new().with_days(9).with_hours(3));
    }

    #[test]
    fn delta_errors() {
        assert!(parse_delta("").is_err());
        assert!(parse_delta("month").is_err());
        assert!(parse_delta("1 fortnight").is_err());
        assert!(parse_delta("x days").is_err());
        assert!(parse_delta("1 day 2").is_err());
    }

    #[test]
    fn weekday_and_frequency_names() {
        assert_eq!(parse_weekday("Sun").unwrap(), Weekday::Sunday);
        assert!(parse_weekday("someday").is_err());
        assert_eq!(parse_frequency("minute").unwrap(), Frequency::Minutes);
    }

    #[test]
    fn cli_overrides_config() {
        let config = TimelessConfig::default();
        let output = OutputArgs {
            zone: Some("Asia/Tokyo".to_string()),
            format: Some(String::new()),
            epoch: None,
        };
        assert_eq!(input_zone(&output, &config), "Asia/Tokyo");
        assert_eq!(output_pattern(&output, &config), None);

        let none = OutputArgs {
            zone: None,
            format: Some("%Y".to_string()),
            epoch: None,
        };
        assert_eq!(input_zone(&none, &config), "UTC");
        assert_eq!(output_pattern(&none, &config), Some("%Y"));
    }

    #[test]
    fn render_epoch_or_text() {
        let config = TimelessConfig::default();
        let dt = parse_instant("1970-01-01 01 [Europe/Vienna]", "UTC").unwrap();
        let epoch = OutputArgs {
            zone: None,
            format: None,
            epoch: Some(EpochUnit::Ms),
        };
        assert_eq!(render(&dt, &epoch, &config).unwrap(), "0");
        let text = OutputArgs {
            zone: None,
            format: None,
            epoch: None,
        };
        assert_eq!(render(&dt, &text, &config).unwrap(), "1970-01-01T01:00:00+01:00");
    }

    #[test]
    fn instant_uses_zone_only_when_missing() {
        let dt = parse_instant("1975-01-01 15", "America/Sao_Paulo").unwrap();
        assert_eq!(dt.zone_name(), "America/Sao_Paulo");
        let dt = parse_instant("1975-01-01 15 [Europe/Paris]", "America/Sao_Paulo").unwrap();
        assert_eq!(dt.zone_name(), "Europe/Paris");
    }
}
