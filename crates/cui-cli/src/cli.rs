//! CLI argument definitions for the `cui` driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cui",
    version,
    about = "Render chart scripts and replay view-history and data-list scripts",
    long_about = "Render JSON chart definitions to $.jqplot(...) scripts and replay\n\
                  navigation or edit scripts against the history and data-list models."
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
    /// Render a chart definition to a script and list its plugins.
    Chart(ChartArgs),

    /// Replay a navigation script and print the resulting history.
    History(HistoryArgs),

    /// Replay an edit script on a list of strings.
    Datalist(DatalistArgs),
}

#[derive(Parser)]
pub struct ChartArgs {
    /// JSON chart definition.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print only the script.
    #[arg(long = "script-only")]
    pub script_only: bool,
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// JSON history configuration.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// JSON navigation script.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}

#[derive(Parser)]
pub struct DatalistArgs {
    /// JSON edit script.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
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
