//! Outlet catalog CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use outlet_catalog::{Catalog, DatasetConfig, default_dataset_path};
use outlet_cli::commands::{QueryStatus, run_query, run_regions};
use outlet_cli::logging::{LogConfig, LogFormat, init_logging};
use outlet_cli::output::OutputFormat;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, FormatArg, LogFormatArg, LogLevelArg};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let catalog = Catalog::open(&dataset_config_from_cli(cli))?;
    let format = match cli.format {
        FormatArg::Table => OutputFormat::Table,
        FormatArg::Json => OutputFormat::Json,
    };
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Command::Regions => {
            run_regions(&catalog, format, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Query(args) => match run_query(&catalog, &args.region, format, &mut stdout)? {
            QueryStatus::Found => Ok(ExitCode::SUCCESS),
            QueryStatus::InvalidRegion => Ok(ExitCode::FAILURE),
        },
    }
}

/// `--dataset` wins over `OUTLET_DATASET_PATH`, which wins over the default file.
fn dataset_config_from_cli(cli: &Cli) -> DatasetConfig {
    let path = cli.dataset.clone().unwrap_or_else(default_dataset_path);
    let config = DatasetConfig::new(path);
    match cli.delimiter {
        Some(delimiter) => config.with_delimiter(delimiter),
        None => config,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
