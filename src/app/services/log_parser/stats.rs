//! Parsing results and report aggregation for weather logs
//!
//! This module provides the result types produced by one parse invocation
//! and the derived statistics consumed by the report command.

use serde::{Deserialize, Serialize};

use crate::app::models::{Observation, WigosStationIdentifier};

/// A single line that failed structural or field-level parsing.
///
/// Purely informational: the line is never retried, and the failure never
/// aborts the surrounding parse.
#[derive(Debug, Clone, Serialize)]
pub struct ParserError {
    /// 1-based position of the line in the input sequence
    pub line_number: usize,

    /// Description of what went wrong
    pub message: String,

    /// The original unparsed text
    pub line: String,

    /// Station identifier context in effect for the whole parse call
    pub station_id: WigosStationIdentifier,
}

/// Parsing result with observations and per-line errors.
///
/// Both sequences preserve input line order, and every input line
/// contributes to exactly one of them. The result owns its data outright,
/// so it stays usable after the line source is dropped or closed.
#[derive(Debug, Clone, Default)]
pub struct ParsingResult {
    /// Successfully parsed observation records
    pub observations: Vec<Observation>,

    /// Lines that failed to parse
    pub errors: Vec<ParserError>,
}

impl ParsingResult {
    /// Total number of input lines this result accounts for
    pub fn total_lines(&self) -> usize {
        self.observations.len() + self.errors.len()
    }
}

/// Validity counts and NaN-aware maxima derived from a parsing result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStats {
    /// Observations where both readings are real numbers
    pub valid: usize,

    /// Observations where exactly one reading is NaN
    pub partial: usize,

    /// Observations where both readings are NaN
    pub invalid: usize,

    /// Lines that failed to parse at all
    pub errors: usize,

    /// Maximum temperature over non-NaN readings, negative infinity if none
    pub max_temperature: f64,

    /// Maximum humidity over non-NaN readings, negative infinity if none
    pub max_humidity: f64,
}

impl ReportStats {
    /// Derive report statistics from a parsing result.
    pub fn from_result(result: &ParsingResult) -> Self {
        Self {
            valid: count(result, Observation::is_valid),
            partial: count(result, Observation::is_partial),
            invalid: count(result, Observation::is_invalid),
            errors: result.errors.len(),
            max_temperature: max_ignoring_nan(
                result.observations.iter().map(Observation::temperature),
            ),
            max_humidity: max_ignoring_nan(result.observations.iter().map(Observation::humidity)),
        }
    }

    /// Total number of parsed observations across all validity classes
    pub fn total_observations(&self) -> usize {
        self.valid + self.partial + self.invalid
    }
}

fn count(result: &ParsingResult, predicate: impl Fn(&Observation) -> bool) -> usize {
    result.observations.iter().filter(|&o| predicate(o)).count()
}

/// Maximum of the non-NaN values, or negative infinity if there are none.
fn max_ignoring_nan(values: impl Iterator<Item = f64>) -> f64 {
    values
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max)
}
