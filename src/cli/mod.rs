//! CLI argument parsing for marginalia
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AddArgs, DeleteArgs, ExportArgs, ListArgs, SearchArgs, TagsArgs};
pub use marginalia_core::format::OutputFormat;
use parse::parse_output_format;

/// Marginalia - inline annotations and hashtags for outline documents
#[derive(Parser, Debug)]
#[command(name = "marginalia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. "debug" or "marginalia_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "MARGINALIA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List annotations in a document
    List(ListArgs),

    /// List annotations carrying every given hashtag
    Search(SearchArgs),

    /// List the hashtags used by annotations
    Tags(TagsArgs),

    /// Annotate a span of a document
    Add(AddArgs),

    /// Remove an annotation, leaving its label text in place
    Delete(DeleteArgs),

    /// Render a document with annotations formatted for a backend
    Export(ExportArgs),
}
