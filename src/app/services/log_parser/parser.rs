//! Core weather log parser implementation
//!
//! The parser walks the input lines exactly once, in order, turning each
//! line into either an observation or a recorded per-line error. It never
//! stops early: malformed input degrades to fewer observations plus more
//! errors, not to a hard failure.

use tracing::{debug, info};

use super::field_parsers::{parse_float, parse_timestamp};
use super::stats::{ParserError, ParsingResult};
use crate::app::models::{Observation, WigosStationIdentifier};
use crate::constants::{LINE_FIELD_COUNT, LINE_FIELD_SEPARATOR, WRONG_FIELD_COUNT_MESSAGE};
use crate::{Error, Result};

/// Tolerant line-by-line parser for single-station weather logs.
///
/// The expected line format is:
/// `ISO_TIMESTAMP,TEMPERATURE_CELSIUS,RELATIVE_HUMIDITY_PERCENT`
///
/// Example:
/// ```text
/// 2025-08-07T10:00:00Z,22.5,58.3
/// 2025-08-07T11:00:00Z,NaN,60.1
/// ```
#[derive(Debug)]
pub struct WeatherLogParser;

impl WeatherLogParser {
    /// Parse a sequence of log lines into observations and per-line errors.
    ///
    /// The station identifier is context only - it is attached to every
    /// produced observation and error, never read from the log content.
    /// Lines are consumed in a single pass and numbered from 1; every line
    /// ends up in exactly one of the two output sequences.
    pub fn parse<I, S>(station_id: &WigosStationIdentifier, lines: I) -> ParsingResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut observations = Vec::new();
        let mut errors = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_number = index + 1;

            match Self::parse_line(station_id, line) {
                Ok(observation) => observations.push(observation),
                Err(error) => {
                    debug!("Skipped line {}: {}", line_number, error);

                    // Per-line records carry the bare failure description,
                    // not the error-tier prefix.
                    let message = match error {
                        Error::DataValidation { message } => message,
                        other => other.to_string(),
                    };

                    errors.push(ParserError {
                        line_number,
                        message,
                        line: line.to_string(),
                        station_id: station_id.clone(),
                    });
                }
            }
        }

        info!(
            "Parsed {} observations and {} errors from {} lines for station {}",
            observations.len(),
            errors.len(),
            observations.len() + errors.len(),
            station_id
        );

        ParsingResult {
            observations,
            errors,
        }
    }

    /// Parse one log line into an observation.
    fn parse_line(station_id: &WigosStationIdentifier, line: &str) -> Result<Observation> {
        // split keeps trailing empty fields, so "ts,22.5," is three parts
        // with an empty humidity that fails float parsing below.
        let parts: Vec<&str> = line.split(LINE_FIELD_SEPARATOR).collect();

        if parts.len() != LINE_FIELD_COUNT {
            return Err(Error::data_validation(WRONG_FIELD_COUNT_MESSAGE));
        }

        let timestamp = parse_timestamp(parts[0])?;
        let temperature = parse_float(parts[1], "temperature")?;
        let humidity = parse_float(parts[2], "humidity")?;

        Ok(Observation::new(
            station_id.clone(),
            timestamp,
            temperature,
            humidity,
        ))
    }
}
