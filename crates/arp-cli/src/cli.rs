//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "arp",
    version,
    about = "Browse the academic record console's tables from the terminal",
    long_about = "Browse the academic record console's tables from the terminal.\n\n\
                  Search, sort, page and select rows exactly as the console's list \
                  views do, either with flags or by replaying a script of UI events."
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

    /// Log output format (pretty for humans, json for machine parsing).
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

    /// Allow record values (query text, selected ids) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Load tables from this directory instead of the built-in set
    /// (defaults to $ARP_FIXTURES_DIR).
    #[arg(long = "fixtures-dir", value_name = "DIR", global = true)]
    pub fixtures_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available tables.
    Tables,

    /// List the action buttons with their icons and colors.
    Actions,

    /// Show one page of a table.
    View(ViewArgs),

    /// Apply a JSON-lines script of UI events to a table.
    Replay(ReplayArgs),
}

/// Options shared by `view` and `replay`.
#[derive(Args)]
pub struct ViewOptionArgs {
    /// Rows per page (overrides the table's default).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Compare digit runs numerically when sorting ("2" before "10").
    #[arg(long = "natural-sort")]
    pub natural_sort: bool,

    /// Keep equal rows in input order under descending sort.
    #[arg(long = "stable-desc")]
    pub stable_desc: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ViewArgs {
    /// Table name (see `arp tables`).
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Search text, matched case-insensitively against the search fields.
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Restrict search to this field (repeatable).
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Click this column header (repeatable; a repeated key toggles direction).
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Vec<String>,

    /// Page to show, starting at 1.
    #[arg(long = "page", value_name = "N")]
    pub page: Option<usize>,

    /// Select the row with this id.
    #[arg(long = "select", value_name = "ID")]
    pub select: Option<String>,

    #[command(flatten)]
    pub options: ViewOptionArgs,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Table name (see `arp tables`).
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Event script, one JSON object per line.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Print only the state after the last event.
    #[arg(long = "final-only")]
    pub final_only: bool,

    #[command(flatten)]
    pub options: ViewOptionArgs,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
