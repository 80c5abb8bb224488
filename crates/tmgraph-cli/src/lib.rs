//! CLI logic for graph-tmgrammar.
//!
//! This module wires argument parsing, configuration, source loading, and
//! the [`tmgraph`] pipeline together.

pub mod error_adapter;

mod args;
mod config;
mod source;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use tmgraph::{GrammarGrapher, TmGraphError};

/// Run the graph-tmgrammar CLI application
///
/// Loads the grammar named by `args.source`, builds its dependency graph,
/// and writes the DOT text to `args.output` or standard output.
///
/// # Errors
///
/// Returns `TmGraphError` for:
/// - Configuration loading errors
/// - Unreadable or unreachable sources
/// - Unrecognized or malformed grammars
/// - Output I/O errors
pub fn run(args: &Args) -> Result<(), TmGraphError> {
    info!(
        source = args.source,
        output_path = args.output.as_deref().unwrap_or("-");
        "Processing grammar"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let options = config::resolve_options(&app_config, args);

    let bytes = source::load_source(&args.source)?;

    let grapher = GrammarGrapher::new(options);
    let grammar = grapher.decode(&bytes)?;
    let dot = grapher.render_dot(&grammar);

    match &args.output {
        Some(path) => {
            fs::write(path, &dot)?;
            info!(output_file = path; "DOT graph written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(dot.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
