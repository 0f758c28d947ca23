//! CLI argument definitions for the document validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qpp-validator",
    version,
    about = "Validate decoded quality-reporting documents",
    long_about = "Validate decoded quality-reporting document trees.\n\n\
                  Runs structural rules for every node, cross-node consistency rules,\n\
                  and eCQM sub-population checks against the measure configuration."
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
    /// Validate one or more node trees stored as JSON.
    Validate(ValidateArgs),

    /// List every template with its validator binding.
    Templates,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Node tree files to validate.
    #[arg(value_name = "TREE", required = true)]
    pub trees: Vec<PathBuf>,

    /// Measure configuration file (default: $QPP_MEASURES_DATA or the bundled table).
    #[arg(long = "measures", value_name = "PATH")]
    pub measures: Option<PathBuf>,

    /// Write a JSON report for every document that fails validation.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
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
