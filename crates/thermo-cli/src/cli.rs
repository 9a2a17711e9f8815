//! CLI argument definitions for the thermal-cycle renamer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use thermo_model::ProfileId;

#[derive(Parser)]
#[command(
    name = "thermo-rename",
    version,
    about = "Rename thermal-cycle measurement files to their profile temperatures",
    long_about = "Sort tabular, image and surface-scan exports of a thermal-cycle run into\n\
                  group folders, renumber them by their sequence number and rename each\n\
                  position to <direction>_<temperature>."
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
    /// Classify, renumber and map the files of a working folder.
    Run(RunArgs),

    /// List the predefined thermal profiles.
    Profiles,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Working folder holding the exported measurement files.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Thermal profile: a (23-step, 260C), b (9-step, 180C) or c (9-step, 125C).
    ///
    /// Peak labels such as `180C` and profile names such as `9-step-a` are
    /// accepted too.
    #[arg(long = "profile", short = 'p', value_name = "PROFILE")]
    pub profile: ProfileId,

    /// JSON file overriding folder names and filename prefixes.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Write the full run report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
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
