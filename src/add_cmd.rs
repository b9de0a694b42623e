use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::AddArgs;
use crate::config::TimelessConfig;
use crate::convert;

/// Print a datetime shifted by a calendar delta.
pub fn run(args: &AddArgs, config: &TimelessConfig) -> Result<()> {
    let zone = convert::input_zone(&args.output, config);

    let dt = convert::parse_instant(&args.datetime, zone)?;
    let delta = convert::parse_delta(&args.delta)?;
    debug!(%dt, %delta, subtract = args.subtract, "applying delta");

    let mut result = if args.subtract {
        dt.subtract(&delta)
    } else {
        dt.add(&delta)
    }
    .with_context(|| format!("cannot apply {delta} to {dt}"))?;

    if let Some(target) = &args.to_zone {
        result = result
            .convert_to(target)
            .with_context(|| format!("cannot convert to {target:?}"))?;
    }
    println!("{}", convert::render(&result, &args.output, config)?);
    Ok(())
}
