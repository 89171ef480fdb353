//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "retrodex",
    version,
    about = "Retro game collection analyzer - ingest and normalize collection data",
    long_about = "Normalize a retro game collection spreadsheet into canonical records.\n\n\
                  Accepts .csv, .xlsx and .xls input with arbitrary column naming\n\
                  (Spanish or English) and produces a validated record set plus the\n\
                  analysis prompt for the collection."
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
    /// Ingest a collection file and print a validation summary.
    Ingest(IngestArgs),

    /// Ingest a collection file and emit the analysis prompt.
    Prompt(PromptArgs),

    /// List canonical fields and their accepted header spellings.
    Fields,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Path to the collection file (.csv, .xlsx, .xls).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write the canonical records as JSON to this path.
    #[arg(long = "records-out", value_name = "PATH")]
    pub records_out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PromptArgs {
    /// Path to the collection file (.csv, .xlsx, .xls).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write the prompt to this path instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Pretty,
    Compact,
    Json,
}
