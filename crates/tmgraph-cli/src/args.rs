//! Command-line argument definitions for graph-tmgrammar.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the grammar source, the graph options,
//! the output destination, configuration file, and logging verbosity.

use clap::Parser;

/// Graphs TextMate grammar interdependencies
#[derive(Parser, Debug, Default)]
#[command(name = "graph-tmgrammar", author, version, about, long_about = None)]
pub struct Args {
    /// The source path or URL for the TextMate grammar
    pub source: String,

    /// A list of node names to exclude from the output
    #[arg(short, long, value_name = "NAMES", num_args = 1.., action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Include `match` and `begin`/`end` regexes as graph nodes
    #[arg(short = 'r', long)]
    pub enable_regex: bool,

    /// Label edges with the kind of reference they represent
    #[arg(short, long)]
    pub label_arrows: bool,

    /// Strip free-spacing `#` comments from regex nodes
    #[arg(short, long)]
    pub uncomment_regex: bool,

    /// Write the graph to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
