//! graph-tmgrammar entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{Level, LevelFilter, debug, error, info, log_enabled};

use tmgraph_cli::{Args, error_adapter::render_report};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting graph-tmgrammar");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = tmgraph_cli::run(&args) {
        let report = render_report(&err);

        // Fatal errors are reported even when logging is turned off
        if log_enabled!(Level::Error) {
            error!("{report}");
        } else {
            eprintln!("{report}");
        }
        process::exit(1);
    }

    info!("Completed successfully");
}
