//! gngplot CLI entry point.

use std::{io, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info, warn};

use gngplot_cli::{Args, error_adapter::write_reports};

/// Log level named by `--log-level`, falling back to `warn` for unknown names.
fn log_level(requested: &str) -> (LevelFilter, bool) {
    match LevelFilter::from_str(requested) {
        Ok(level) => (level, true),
        Err(_) => (LevelFilter::Warn, false),
    }
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let (level, recognized) = log_level(&args.log_level);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
    if !recognized {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
    }

    info!(level:?, command:? = args.command; "Starting gngplot");
    debug!(args:?; "Parsed arguments");

    let Err(err) = gngplot_cli::run(&args) else {
        info!("Completed successfully");
        return;
    };

    // Reports bypass the logger
    if let Err(write_err) = write_reports(&err, &mut io::stderr().lock()) {
        warn!(err:err = write_err; "Failed to write error report");
        eprintln!("{err}");
    }
    process::exit(1);
}
