//! Command implementations for the WIGOS weather log processor CLI
//!
//! Each command lives in its own module; this module dispatches based on the
//! parsed arguments.

pub mod report;
pub mod shared;

use crate::Result;
use crate::app::services::log_parser::ReportStats;
use crate::cli::args::{Args, Commands, ReportArgs};

/// Main command runner.
///
/// With no subcommand the processor behaves like `report` with its default
/// arguments, mirroring the zero-configuration invocation of the original
/// tool.
pub fn run(args: Args) -> Result<ReportStats> {
    match args.command {
        Some(Commands::Report(report_args)) => report::run_report(report_args),
        None => report::run_report(ReportArgs::default()),
    }
}
