//! Command-line argument definitions for the gngplot CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects what to do with the input; global
//! options choose the configuration file and logging verbosity.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the gngplot tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// What to do with the input graph frames
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pretty-print a JSON document
    Print {
        /// Input file; standard input when omitted
        input: Option<PathBuf>,

        /// Spaces per indentation level
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Plot one frame in 2D at its node coordinates
    Plot {
        /// Input file; standard input when omitted
        input: Option<PathBuf>,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: PathBuf,
    },

    /// Plot one frame in 3D using a spring layout
    #[command(name = "plot3d")]
    Plot3d {
        /// Input file; standard input when omitted
        input: Option<PathBuf>,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out3d.svg")]
        output: PathBuf,

        /// Seed for the spring layout
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Redraw a 2D plot for every line-delimited frame
    Animate {
        /// Input file; standard input when omitted
        input: Option<PathBuf>,

        /// SVG file replaced on every frame
        #[arg(short, long, default_value = "live.svg")]
        output: PathBuf,
    },
}

impl Command {
    /// Input path, if one was given
    pub fn input(&self) -> Option<&PathBuf> {
        match self {
            Self::Print { input, .. }
            | Self::Plot { input, .. }
            | Self::Plot3d { input, .. }
            | Self::Animate { input, .. } => input.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_defaults() {
        let args = Args::try_parse_from(["gngplot", "plot", "graph.json"]).unwrap();

        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
        match args.command {
            Command::Plot { input, output } => {
                assert_eq!(input, Some(PathBuf::from("graph.json")));
                assert_eq!(output, PathBuf::from("out.svg"));
            }
            other => panic!("Expected plot, got {other:?}"),
        }
    }

    #[test]
    fn test_input_is_optional() {
        let args = Args::try_parse_from(["gngplot", "animate", "-o", "frames.svg"]).unwrap();
        assert!(args.command.input().is_none());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "gngplot",
            "plot3d",
            "g.json",
            "--seed",
            "3",
            "--log-level",
            "debug",
            "--config",
            "my.toml",
        ])
        .unwrap();

        assert_eq!(args.log_level, "debug");
        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
        assert!(matches!(args.command, Command::Plot3d { seed: Some(3), .. }));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["gngplot"]).is_err());
    }
}
