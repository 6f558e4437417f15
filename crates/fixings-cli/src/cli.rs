//! CLI argument definitions for the fixings normalizer.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fixings",
    version,
    about = "Normalize raw overnight rate feeds into Date,Rate fixings",
    long_about = "Normalize raw overnight rate feeds into Date,Rate fixings.\n\n\
                  Reads a central bank download (metadata preamble followed by an\n\
                  \"OBSERVATIONS\" table), selects one published series, converts\n\
                  percentages to decimal fractions, and writes a sorted two-column CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a raw feed into a Date,Rate CSV.
    Normalize(NormalizeArgs),

    /// List the rate series published in a raw feed.
    Columns(ColumnsArgs),

    /// Load a normalized Date,Rate CSV with business-day adjusted dates.
    Fixings(FixingsArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to the raw feed (e.g. data/corra_raw.csv).
    #[arg(value_name = "RAW_CSV")]
    pub raw_csv: PathBuf,

    /// Output path for the Date,Rate CSV (e.g. data/corra_fixings.csv).
    #[arg(value_name = "OUTPUT_CSV")]
    pub output_csv: PathBuf,

    /// Series column to use for the rate (e.g. AVG.INTWO).
    #[arg(value_name = "RATE_COLUMN")]
    pub rate_column: String,

    /// Earliest date to keep, inclusive (YYYY-MM-DD).
    #[arg(long = "start-date", alias = "start_date", value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Latest date to keep, inclusive (YYYY-MM-DD).
    #[arg(long = "end-date", alias = "end_date", value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Header label for the date column.
    #[arg(long = "date-header", default_value = "Date")]
    pub date_header: String,

    /// Header label for the rate column.
    #[arg(long = "rate-header", default_value = "Rate")]
    pub rate_header: String,

    /// Write the output in place instead of via a temp file and rename.
    #[arg(long = "no-atomic")]
    pub no_atomic: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the raw feed.
    #[arg(value_name = "RAW_CSV")]
    pub raw_csv: PathBuf,
}

#[derive(Parser)]
pub struct FixingsArgs {
    /// Path to a normalized Date,Rate CSV.
    #[arg(value_name = "FIXINGS_CSV")]
    pub fixings_csv: PathBuf,

    /// Calendar name shown in output.
    #[arg(long = "calendar", default_value = "Canada")]
    pub calendar: String,

    /// File of holiday dates (one YYYY-MM-DD per line) observed by the calendar.
    #[arg(long = "holidays", value_name = "FILE")]
    pub holidays: Option<PathBuf>,

    /// Business-day adjustment rule.
    #[arg(long = "convention", value_enum, default_value = "modified-following")]
    pub convention: ConventionArg,

    /// Maximum number of fixings to print.
    #[arg(long = "limit", default_value_t = 10)]
    pub limit: usize,
}

/// CLI business-day convention choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ConventionArg {
    Unadjusted,
    Following,
    ModifiedFollowing,
    Preceding,
    ModifiedPreceding,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{value}': {e}"))
}
