//! WIGOS Weather Log Processor Library
//!
//! A Rust library for parsing line-oriented weather logs recorded against a
//! single WIGOS-identified meteorological station.
//!
//! This library provides tools for:
//! - Parsing and validating WIGOS station identifiers from their canonical
//!   four-part string form
//! - Tolerant line-by-line parsing of timestamp/temperature/humidity records,
//!   collecting per-line errors instead of aborting
//! - Range-based normalization of physically impossible readings to NaN
//! - Classifying observations as valid, partial, or invalid
//! - Aggregating validity counts and NaN-aware maxima for reporting

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod log_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Observation, WigosStationIdentifier};
pub use app::services::log_parser::{ParserError, ParsingResult, ReportStats, WeatherLogParser};

/// Result type alias for weather log processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for weather log processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// WIGOS station identifier is structurally invalid
    #[error("Invalid WIGOS station identifier: {message}")]
    InvalidStationId { message: String },

    /// Field-level data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid station identifier error
    pub fn invalid_station_id(message: impl Into<String>) -> Self {
        Self::InvalidStationId {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
