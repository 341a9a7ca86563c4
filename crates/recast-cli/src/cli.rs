//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "recast",
    version,
    about = "Batch CSV schema transformation driven by mapping configs",
    long_about = "Rename columns, inject defaulted columns, and reorder the\n\
                  output layout of every CSV table in a directory, as described\n\
                  by a declarative YAML mapping config."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Transform every table in a directory per the mapping config.
    Convert(ConvertArgs),

    /// Validate a mapping config and print the compiled plan.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Directory holding the input CSV tables.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Mapping config: a YAML file applied to every table, or a directory
    /// resolved per table (<table>.yaml, <table>_config.yaml, default.yaml).
    #[arg(long = "config", value_name = "FILE|DIR")]
    pub config: PathBuf,

    /// Output directory (default: <INPUT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate configs and list planned work without touching table data.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip writing the JSON batch report into the output directory.
    #[arg(long = "no-report")]
    pub no_report: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Mapping config file to validate.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
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
