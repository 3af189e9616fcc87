//! Field parsing utilities for weather log records
//!
//! Helper functions for parsing the individual comma-separated fields of a
//! log line, with error messages that carry the offending text.

use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Parse a timestamp field as a strict ISO-8601 instant.
///
/// Leading and trailing whitespace is ignored. The instant must carry an
/// explicit offset, e.g. `2025-08-07T10:00:00Z`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            Error::data_validation(format!(
                "Invalid timestamp format: '{}' ({}) (expected ISO-8601 instant like '2025-08-07T10:00:00Z')",
                trimmed, e
            ))
        })
}

/// Parse a float field such as temperature or humidity.
///
/// Leading and trailing whitespace is ignored. The textual forms `NaN`,
/// `Infinity` and `-Infinity` are valid floating-point literals here, per
/// standard float parsing; range checks happen later, at observation
/// construction.
pub fn parse_float(value: &str, field_name: &str) -> Result<f64> {
    let trimmed = value.trim();

    trimmed.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid float format for {}: '{}' ({})",
            field_name, trimmed, e
        ))
    })
}
