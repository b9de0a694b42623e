//! Log setup: library events go to stderr so stdout carries only values.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Crates whose events are shown. The binary itself logs under `timeless`.
const LOG_TARGETS: [&str; 4] = [
    env!("CARGO_CRATE_NAME"),
    timeless_datetime::LOG_TARGET,
    timeless_period::LOG_TARGET,
    timeless_convert::LOG_TARGET,
];

/// Picks the level for `-v` repetitions; `--quiet` keeps errors only.
///
/// Warnings are on by default because the converters report their daily
/// fallback and the period iterator its skipped instants as warnings.
pub fn level(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Builds `target=level` directives for every workspace crate.
fn directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG`, when set, replaces the
/// directives derived from the flags.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level(verbosity, quiet))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .init();
}
