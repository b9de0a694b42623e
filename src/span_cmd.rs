use anyhow::{Context, Result};

use timeless_datetime::today;
use timeless_period::{month_of, week_of};

use crate::cli::{SpanArgs, SpanKind};
use crate::config::TimelessConfig;
use crate::convert;

/// Print the week or month around a date, one element per line.
pub fn run(args: &SpanArgs, config: &TimelessConfig) -> Result<()> {
    let zone = convert::input_zone(&args.output, config);
    let options = convert::build_span_options(args.frequency.as_deref(), args.step, config)?;

    let day = match &args.date {
        Some(text) => convert::parse_instant(text, zone)?,
        None => today(zone).with_context(|| format!("cannot read today in {zone:?}"))?,
    };

    let period = match args.kind {
        SpanKind::Week => {
            let week_start = convert::parse_weekday(
                args.week_start
                    .as_deref()
                    .unwrap_or(&config.defaults.week_start),
            )?;
            week_of(&day, week_start, options)
        }
        SpanKind::Month => month_of(&day, options),
    }
    .context("invalid span")?;

    for value in &period {
        println!("{}", convert::render(&value, &args.output, config)?);
    }
    Ok(())
}
