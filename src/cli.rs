use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Timeless calendar toolkit.
#[derive(Parser)]
#[command(
    name = "timeless",
    version,
    about = "Zone-aware date arithmetic and period generation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print every element of a period.
    Period(PeriodArgs),
    /// Add a calendar delta to a datetime.
    Add(AddArgs),
    /// Print the week or month around a date.
    Span(SpanArgs),
}

/// Output options shared by every subcommand.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Zone for inputs that carry no zone or offset. Overrides the config.
    #[arg(short, long)]
    pub zone: Option<String>,

    /// strftime pattern for output. Overrides the config; empty for ISO-8601.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print Unix epoch values in this unit instead of formatted text.
    #[arg(long, value_enum, conflicts_with = "format")]
    pub epoch: Option<EpochUnit>,
}

/// Unit for `--epoch` output.
#[derive(Clone, Copy, ValueEnum)]
pub enum EpochUnit {
    S,
    Ms,
    Us,
    Ns,
}

/// Arguments for the `period` subcommand.
#[derive(clap::Args)]
pub struct PeriodArgs {
    /// First element, e.g. "1975-01-01" or "1975-01-01 06:00 [Europe/Vienna]".
    pub start: String,

    /// Last element, inclusive.
    #[arg(required_unless_present = "count", conflicts_with = "count")]
    pub end: Option<String>,

    /// Number of elements instead of an end.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Step unit (years, months, weeks, days, hours, minutes, seconds,
    /// microseconds). Overrides the config.
    #[arg(long)]
    pub frequency: Option<String>,

    /// Units per step; negative to count down. Overrides the config.
    #[arg(long, allow_hyphen_values = true)]
    pub step: Option<i64>,

    /// Shift the whole period, e.g. "1 month, -2 days".
    #[arg(long, allow_hyphen_values = true)]
    pub shift: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Datetime to start from.
    pub datetime: String,

    /// Delta to apply, e.g. "1 month, -2 days".
    #[arg(allow_hyphen_values = true)]
    pub delta: String,

    /// Subtract the delta instead of adding it.
    #[arg(long)]
    pub subtract: bool,

    /// Convert the result to this zone before printing.
    #[arg(long = "to")]
    pub to_zone: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Which span to print.
#[derive(Clone, Copy, ValueEnum)]
pub enum SpanKind {
    Week,
    Month,
}

/// Arguments for the `span` subcommand.
#[derive(clap::Args)]
pub struct SpanArgs {
    /// Week or month.
    #[arg(value_enum)]
    pub kind: SpanKind,

    /// Reference date; today when omitted.
    #[arg(short, long)]
    pub date: Option<String>,

    /// First day of the week. Overrides the config.
    #[arg(long)]
    pub week_start: Option<String>,

    /// Step unit. Overrides the config.
    #[arg(long)]
    pub frequency: Option<String>,

    /// Units per step. Overrides the config.
    #[arg(long)]
    pub step: Option<i64>,

    #[command(flatten)]
    pub output: OutputArgs,
}
