//! `cui` command-line driver.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cui_cli::logging::{LogConfig, LogFormat, init_logging};
use cui_cli::{chart, datalist, history};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{ChartArgs, Cli, Command, DatalistArgs, HistoryArgs, LogFormatArg, LogLevelArg};
use crate::summary::{print_chart, print_datalist, print_history};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Chart(args) => run_chart(args),
        Command::History(args) => run_history(args),
        Command::Datalist(args) => run_datalist(args),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run_chart(args: &ChartArgs) -> Result<()> {
    let definition = chart::parse_chart(&read_input(&args.file)?)?;
    let rendered = chart::render_chart(&definition)?;
    print_chart(&rendered, args.script_only);
    Ok(())
}

fn run_history(args: &HistoryArgs) -> Result<()> {
    let config = history::parse_config(&read_input(&args.config)?)?;
    let script = history::parse_script(&read_input(&args.script)?)?;
    let report = history::replay(config, &script)?;
    print_history(&report);
    Ok(())
}

fn run_datalist(args: &DatalistArgs) -> Result<()> {
    let script = datalist::parse_script(&read_input(&args.script)?)?;
    let report = datalist::replay(&script)?;
    print_datalist(&report);
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
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
