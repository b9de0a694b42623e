use anyhow::{Context, Result};
use tracing::info;

use timeless_period::{Period, PeriodEnd};

use crate::cli::PeriodArgs;
use crate::config::TimelessConfig;
use crate::convert;

/// Print every element of a period, one per line.
pub fn run(args: &PeriodArgs, config: &TimelessConfig) -> Result<()> {
    let zone = convert::input_zone(&args.output, config);

    let start = convert::parse_instant(&args.start, zone)?;
    let end = match (&args.end, args.count) {
        (Some(end), _) => PeriodEnd::Instant(convert::parse_instant(end, zone)?),
        (None, Some(count)) => PeriodEnd::Count(count),
        (None, None) => anyhow::bail!("give an end datetime or --count"),
    };
    let frequency =
        convert::parse_frequency(args.frequency.as_deref().unwrap_or(&config.period.frequency))?;
    let step = args.step.unwrap_or(config.period.step);

    let mut period = Period::new(start, end, frequency, step).context("invalid period")?;
    if let Some(shift) = &args.shift {
        let delta = convert::parse_delta(shift)?;
        period = period
            .shift(&delta)
            .with_context(|| format!("cannot shift period by {delta}"))?;
    }

    info!(
        start = %period.start(),
        end = %period.end(),
        %frequency,
        step,
        "generating period"
    );
    for value in &period {
        println!("{}", convert::render(&value, &args.output, config)?);
    }
    Ok(())
}
