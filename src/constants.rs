//! Application constants for the WIGOS weather log processor
//!
//! This module contains the physical validity ranges, identifier format
//! limits, and wire-format constants used throughout the application.

// =============================================================================
// Log Line Wire Format
// =============================================================================

/// Field separator within a log line
pub const LINE_FIELD_SEPARATOR: char = ',';

/// Number of fields a well-formed log line must contain
/// (timestamp, temperature, humidity)
pub const LINE_FIELD_COUNT: usize = 3;

/// Error message recorded for lines with the wrong field count
pub const WRONG_FIELD_COUNT_MESSAGE: &str = "Line does not contain exactly three parts.";

/// Default input file processed by the report command
pub const DEFAULT_LOG_FILE: &str = "0-20000-0-02513.csv";

// =============================================================================
// Physical Validity Ranges
// =============================================================================

/// Temperature and humidity bounds outside which a reading is considered
/// physically impossible and normalized to NaN.
pub mod ranges {
    /// Minimum plausible air temperature in degrees Celsius
    pub const TEMPERATURE_MIN: f64 = -100.0;

    /// Maximum plausible air temperature in degrees Celsius
    pub const TEMPERATURE_MAX: f64 = 70.0;

    /// Minimum relative humidity in percent
    pub const HUMIDITY_MIN: f64 = 0.0;

    /// Maximum relative humidity in percent
    pub const HUMIDITY_MAX: f64 = 100.0;
}

// =============================================================================
// WIGOS Station Identifier Format
// =============================================================================

/// Structural limits of the four-part WIGOS station identifier
pub mod wigos {
    /// Separator between the four identifier components
    pub const COMPONENT_SEPARATOR: char = '-';

    /// Number of components in a canonical identifier string
    pub const COMPONENT_COUNT: usize = 4;

    /// The only identifier series currently defined
    pub const SUPPORTED_SERIES: u32 = 0;

    /// Maximum length of the local identifier component, in characters
    pub const LOCAL_IDENTIFIER_MAX_LEN: usize = 16;
}
