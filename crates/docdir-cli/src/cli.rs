//! CLI argument definitions for the doctor directory.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use docdir_ingest::DEFAULT_FEED_URL;
use docdir_model::{ConsultationFilter, SortKey};

#[derive(Parser)]
#[command(
    name = "docdir",
    version,
    about = "Doctor directory browser - search, filter, and sort the feed",
    long_about = "Browse a remote doctor directory from the terminal.\n\n\
                  Filters by name search, consultation mode, and specialty;\n\
                  sorts by fee or experience; and prints the query string\n\
                  that reproduces the current view as a shareable link."
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

    /// Doctor feed endpoint.
    #[arg(
        long = "url",
        value_name = "URL",
        default_value = DEFAULT_FEED_URL,
        global = true
    )]
    pub url: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the directory and show the filtered, sorted view.
    List(ListArgs),

    /// List every distinct specialty in the feed.
    Specialties,

    /// Suggest up to 3 doctor names completing a partial query.
    Suggest(SuggestArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Seed the filter state from a shareable query string,
    /// e.g. "consultationType=In+Clinic&specialties=Dentist&sortBy=fees".
    #[arg(long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Replace the name search text.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Replace the consultation filter.
    #[arg(long = "consultation", value_enum, value_name = "MODE")]
    pub consultation: Option<ConsultationArg>,

    /// Toggle a specialty in or out of the selection (repeatable).
    #[arg(long = "specialty", value_name = "NAME")]
    pub specialties: Vec<String>,

    /// Replace the sort order ("none" clears sorting).
    #[arg(long = "sort", value_enum, value_name = "KEY")]
    pub sort: Option<SortArg>,

    /// Emit the visible records as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Partial doctor name to complete.
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// CLI consultation filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ConsultationArg {
    All,
    VideoConsult,
    InClinic,
}

impl From<ConsultationArg> for ConsultationFilter {
    fn from(arg: ConsultationArg) -> Self {
        match arg {
            ConsultationArg::All => ConsultationFilter::All,
            ConsultationArg::VideoConsult => ConsultationFilter::VideoConsult,
            ConsultationArg::InClinic => ConsultationFilter::InClinic,
        }
    }
}

/// CLI sort choices; `None` clears an inherited sort.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Fees,
    Experience,
    None,
}

impl From<SortArg> for Option<SortKey> {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Fees => Some(SortKey::Fees),
            SortArg::Experience => Some(SortKey::Experience),
            SortArg::None => None,
        }
    }
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
