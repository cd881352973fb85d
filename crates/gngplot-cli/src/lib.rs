//! gngplot CLI library
//!
//! This module contains the core CLI logic for the gngplot tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::io::{self, Write};

use log::info;

use gngplot::{Gngplot, GngplotError, source::GraphFrameSource};

/// Run the gngplot CLI application, writing reports to standard output.
///
/// # Errors
///
/// Returns `GngplotError` for:
/// - Configuration loading errors
/// - An input file that cannot be opened
/// - A malformed document in print and plot modes
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), GngplotError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(args, &mut out)
}

/// Run the application, writing pretty-printed JSON and frame summaries to
/// `out`.
pub fn run_to(args: &Args, out: &mut dyn Write) -> Result<(), GngplotError> {
    let mut app_config = config::load_config(args.config.as_ref())?;

    // Command-line flags win over the configuration file
    match &args.command {
        Command::Print {
            indent: Some(indent),
            ..
        } => app_config.print_mut().set_indent(*indent),
        Command::Plot3d {
            seed: Some(seed), ..
        } => app_config.plot3d_mut().set_seed(*seed),
        _ => {}
    }

    let source = GraphFrameSource::open(args.command.input())?;
    let gngplot = Gngplot::new(app_config);

    match &args.command {
        Command::Print { .. } => gngplot.print(source, out)?,
        Command::Plot { output, .. } => {
            let summary = gngplot.plot(source, output)?;
            writeln!(out, "{summary}")?;
        }
        Command::Plot3d { output, .. } => {
            let summary = gngplot.plot3d(source, output)?;
            writeln!(out, "{summary}")?;
        }
        Command::Animate { output, .. } => {
            let frames = gngplot.animate(source, output)?;
            info!(frames = frames, output = output.display().to_string(); "Animation written");
        }
    }

    Ok(())
}
