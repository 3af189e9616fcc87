//! Tolerant parser for single-station weather log files
//!
//! This module converts raw log lines into typed [`Observation`] records
//! while collecting per-line errors, so one malformed line never aborts the
//! whole input.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - The per-line parsing loop and error accumulation
//! - [`field_parsers`] - Utility functions for timestamp and float fields
//! - [`stats`] - Parse results, per-line errors, and report aggregation
//!
//! ## Usage
//!
//! ```rust
//! use wigos_log_processor::{WeatherLogParser, WigosStationIdentifier};
//!
//! # fn example() -> wigos_log_processor::Result<()> {
//! let station: WigosStationIdentifier = "0-20000-0-02126".parse()?;
//! let result = WeatherLogParser::parse(
//!     &station,
//!     ["2025-08-07T10:00:00Z,22.5,58.3", "bad,line"],
//! );
//!
//! assert_eq!(result.observations.len(), 1);
//! assert_eq!(result.errors.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`Observation`]: crate::app::models::Observation

pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::WeatherLogParser;
pub use stats::{ParserError, ParsingResult, ReportStats};
