//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "outlets",
    version,
    about = "Query the outlet catalog by region",
    long_about = "Query a pre-loaded dataset of retail outlets.\n\n\
                  Lists the regions present in the dataset and the outlets of one region,\n\
                  ordered by city and name."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dataset file (default: $OUTLET_DATASET_PATH, then ./parafarmacie.csv).
    #[arg(long = "dataset", value_name = "PATH", global = true)]
    pub dataset: Option<PathBuf>,

    /// Field delimiter of the dataset (default: ';').
    #[arg(long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter, global = true)]
    pub delimiter: Option<u8>,

    /// Result format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: FormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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
    /// List the regions present in the dataset.
    Regions,

    /// List the outlets of one region.
    Query(QueryArgs),
}

#[derive(Parser)]
pub struct QueryArgs {
    /// Numeric region code, as printed by `regions`.
    #[arg(value_name = "REGION", allow_hyphen_values = true)]
    pub region: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "tab" | "\\t" => Ok(b'\t'),
        _ => match raw.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("delimiter must be a single ASCII character, got '{raw}'")),
        },
    }
}
