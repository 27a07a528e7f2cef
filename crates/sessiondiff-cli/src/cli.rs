//! CLI argument definitions for sessiondiff.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `compare` | Classify each security group's holiday schedule against its normal one |
//! | `inspect` | Decode one session list file and print the parsed records |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `-v` | off | Raise log verbosity (repeatable) |
//!
//! # Examples
//!
//! ```bash
//! sessiondiff compare --baseline TradingSessionList.dat \
//!     --holiday TradingSessionListMemorialDay.dat --format table
//!
//! SESSIONDIFF_BASELINE=normal.dat SESSIONDIFF_HOLIDAY=holiday.dat \
//!     sessiondiff compare --align by-date
//!
//! sessiondiff inspect TradingSessionList.dat --group ES --pretty
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "sessiondiff",
    author,
    version,
    about = "Compare holiday trading session lists against a normal day"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings (such as skipped lines) as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Log verbosity: -v for info, -vv for debug. RUST_LOG applies otherwise.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify how each holiday schedule differs from the normal schedule.
    Compare(CompareArgs),
    /// Decode a session list file and print its records.
    Inspect(InspectArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    /// Pair dates by list position.
    Positional,
    /// Pair dates by trade date.
    ByDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MalformedArg {
    /// Report malformed lines and continue.
    Skip,
    /// Stop at the first malformed line.
    Halt,
}

#[derive(Debug, Clone, Args)]
pub struct LoadArgs {
    /// Policy for lines that fail to decode.
    #[arg(long, value_enum, default_value_t = MalformedArg::Skip)]
    pub on_malformed: MalformedArg,

    /// Decode lines on all cores.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CompareArgs {
    /// Normal-day session list (falls back to SESSIONDIFF_BASELINE).
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Holiday session list (falls back to SESSIONDIFF_HOLIDAY).
    #[arg(long)]
    pub holiday: Option<PathBuf>,

    /// How baseline dates are paired with holiday dates.
    #[arg(long, value_enum, default_value_t = AlignArg::Positional)]
    pub align: AlignArg,

    #[command(flatten)]
    pub load: LoadArgs,
}

#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Session list file to decode.
    pub path: PathBuf,

    /// Only print this security group.
    #[arg(long)]
    pub group: Option<String>,

    #[command(flatten)]
    pub load: LoadArgs,
}
