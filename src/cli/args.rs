//! Command-line argument definitions for the WIGOS weather log processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_LOG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the WIGOS weather log processor
///
/// Parses a line-oriented weather log recorded against a single
/// WIGOS-identified station and reports validity counts and maxima.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wigos-log-processor",
    version,
    about = "Parse single-station WIGOS weather logs and report observation validity",
    long_about = "Parses a line-oriented weather log (ISO timestamp, temperature, humidity per \
                  line) for a single WIGOS-identified meteorological station. Malformed lines \
                  are collected as errors instead of aborting the run, and a summary report \
                  with validity counts and maxima is printed."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a station log file and print a validity report (default command)
    Report(ReportArgs),
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Input weather log file
    ///
    /// The file stem must be the canonical WIGOS identifier of the station
    /// the log belongs to, e.g. 0-20000-0-02513.csv.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "Input weather log file, named after the station identifier"
    )]
    pub input_path: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long, help = "Enable verbose logging output")]
    pub verbose: bool,

    /// Suppress all logging except warnings and errors
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        help = "Suppress all logging except warnings and errors"
    )]
    pub quiet: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,
            quiet: false,
        }
    }
}

impl ReportArgs {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
