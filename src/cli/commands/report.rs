//! Report command implementation
//!
//! Reads a station log file, derives the station identifier from the file
//! name, runs the tolerant parser, and prints validity counts and maxima.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use super::shared::setup_logging;
use crate::app::models::WigosStationIdentifier;
use crate::app::services::log_parser::{ReportStats, WeatherLogParser};
use crate::cli::args::ReportArgs;
use crate::{Error, Result};

/// Run the report command.
pub fn run_report(args: ReportArgs) -> Result<ReportStats> {
    setup_logging(&args)?;

    let station_id = station_id_from_path(&args.input_path)?;
    info!(
        "Processing log {} for station {}",
        args.input_path.display(),
        station_id
    );

    let lines = read_lines(&args.input_path)?;
    let result = WeatherLogParser::parse(&station_id, &lines);
    let stats = ReportStats::from_result(&result);

    if stats.errors > 0 {
        warn!("{} lines failed to parse", stats.errors);
        for error in &result.errors {
            debug!("Line {}: {} ({})", error.line_number, error.message, error.line);
        }
    }

    print_report(&stats);

    Ok(stats)
}

/// Derive the station identifier from the log file name.
///
/// The file stem is the canonical identifier string, e.g.
/// `0-20000-0-02513.csv` belongs to station `0-20000-0-02513`.
fn station_id_from_path(path: &Path) -> Result<WigosStationIdentifier> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            Error::configuration(format!(
                "Cannot derive a station identifier from path '{}'",
                path.display()
            ))
        })?;

    stem.parse()
}

/// Read all log lines up front.
///
/// Any I/O failure here aborts the command before parsing starts; there is
/// no partial result for a log that could not be read.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open log file {}", path.display()), e))?;

    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| Error::io(format!("Failed to read log file {}", path.display()), e))
}

/// Print the fixed-format validity report.
fn print_report(stats: &ReportStats) {
    println!("Valid:   {}", stats.valid);
    println!("Partial: {}", stats.partial);
    println!("Invalid: {}", stats.invalid);
    println!("Errors:  {}", stats.errors);
    println!();
    println!("Max Temp:     {:.2}", stats.max_temperature);
    println!("Max Humidity: {:.2}", stats.max_humidity);
}
