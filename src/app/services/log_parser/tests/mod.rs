//! Test utilities for weather log parser testing
//!
//! Shared helpers used across the parser and stats test modules.

use crate::app::models::WigosStationIdentifier;

// Test modules
mod parser_tests;

/// Station identifier used throughout the parser tests
pub fn test_station() -> WigosStationIdentifier {
    "0-20000-0-02126"
        .parse()
        .expect("test station identifier must parse")
}

/// A small mixed log: two clean lines, one partial, one malformed,
/// one bad timestamp.
pub fn mixed_log_lines() -> Vec<&'static str> {
    vec![
        "2025-08-07T10:00:00Z,22.5,58.3",
        "2025-08-07T11:00:00Z,NaN,60.1",
        "bad,line",
        "2025-08-07T12:00:00Z,21.0,55.0",
        "not-a-timestamp,1.0,2.0",
    ]
}
