//! Data models for WIGOS weather log processing
//!
//! This module contains the core data structures for representing a WIGOS
//! station identity and a single timestamped observation, following the WMO
//! WIGOS station identifier specification.

use crate::constants::{ranges, wigos};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// WIGOS Station Identifier
// =============================================================================

/// A WIGOS station identifier.
///
/// The canonical string format is:
/// `WIGOSIdentifierSeries-IssuerOfIdentifier-IssueNumber-LocalIdentifier`
///
/// Valid identifiers:
/// - WIGOSIdentifierSeries: 0 (the only series currently defined)
/// - IssuerOfIdentifier: 0-65534
/// - IssueNumber: 0-65534
/// - LocalIdentifier: at most 16 characters, no `-`
///
/// Example (SMHI Gunnarn): `0-20000-0-02126`
///
/// Construction is the single validation point; a value of this type always
/// satisfies the constraints above.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WigosStationIdentifier {
    series: u32,
    issuer: u32,
    issue_number: u32,
    local_identifier: String,
}

impl WigosStationIdentifier {
    /// Create a new identifier from its four components, validating each.
    ///
    /// The unsigned types make the non-negativity constraint structural;
    /// values above the documented 65534 issuer/issue ceiling are accepted,
    /// matching upstream registries that only enforce non-negativity.
    pub fn new(
        series: u32,
        issuer: u32,
        issue_number: u32,
        local_identifier: impl Into<String>,
    ) -> Result<Self> {
        let local_identifier = local_identifier.into();

        if series != wigos::SUPPORTED_SERIES {
            return Err(Error::invalid_station_id(format!(
                "Series component of a WIGOS ID must be zero, got {}",
                series
            )));
        }

        // Length is counted in characters, not bytes; local identifiers are
        // not required to be ASCII.
        if local_identifier.chars().count() > wigos::LOCAL_IDENTIFIER_MAX_LEN
            || local_identifier.trim().is_empty()
            || local_identifier.contains(wigos::COMPONENT_SEPARATOR)
        {
            return Err(Error::invalid_station_id(format!(
                "Local identifier '{}' must be 1-16 characters, non-blank, without hyphens",
                local_identifier
            )));
        }

        Ok(Self {
            series,
            issuer,
            issue_number,
            local_identifier,
        })
    }

    /// WIGOS identifier series (always 0)
    pub fn series(&self) -> u32 {
        self.series
    }

    /// Issuer of identifier
    pub fn issuer(&self) -> u32 {
        self.issuer
    }

    /// Issue number
    pub fn issue_number(&self) -> u32 {
        self.issue_number
    }

    /// Local identifier assigned by the issuer
    pub fn local_identifier(&self) -> &str {
        &self.local_identifier
    }
}

impl FromStr for WigosStationIdentifier {
    type Err = Error;

    /// Parse the canonical four-part hyphen-separated form.
    ///
    /// The local identifier component is taken verbatim, without trimming.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(wigos::COMPONENT_SEPARATOR).collect();

        if parts.len() != wigos::COMPONENT_COUNT {
            return Err(Error::invalid_station_id(format!(
                "WIGOS ID string must have 4 parts separated by hyphens. Found: {}",
                parts.len()
            )));
        }

        let numeric = |part: &str| -> Result<u32> {
            part.parse::<u32>().map_err(|e| {
                Error::invalid_station_id(format!(
                    "Failed to parse numeric part of the WIGOS ID: {} ({})",
                    s, e
                ))
            })
        };

        Self::new(
            numeric(parts[0])?,
            numeric(parts[1])?,
            numeric(parts[2])?,
            parts[3],
        )
    }
}

impl fmt::Display for WigosStationIdentifier {
    /// Canonical string representation; the inverse of [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.series, self.issuer, self.issue_number, self.local_identifier
        )
    }
}

// =============================================================================
// Observation Record
// =============================================================================

/// A meteorological observation at a specific station at a specific time.
///
/// Readings outside their physical validity range are normalized to NaN at
/// construction, so an out-of-range value never surfaces as a real
/// measurement. An observation is then classified by [`Observation::is_valid`],
/// [`Observation::is_partial`], or [`Observation::is_invalid`] - exactly one
/// of the three holds.
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    station_id: WigosStationIdentifier,
    timestamp: DateTime<Utc>,
    temperature: f64,
    humidity: f64,
}

impl Observation {
    /// Create a new observation, normalizing out-of-range readings.
    ///
    /// Temperature outside [-100, 70] degrees Celsius becomes NaN. Humidity
    /// outside [0, 100] percent also blanks the *temperature*, while the
    /// humidity value itself is kept. Upstream loggers depend on that exact
    /// behavior, so it is preserved here.
    pub fn new(
        station_id: WigosStationIdentifier,
        timestamp: DateTime<Utc>,
        temperature: f64,
        humidity: f64,
    ) -> Self {
        let mut temperature = temperature;

        // Comparisons are deliberately strict-ordering ones: a NaN input is
        // already the sentinel and must not trigger further normalization.
        if temperature < ranges::TEMPERATURE_MIN || temperature > ranges::TEMPERATURE_MAX {
            temperature = f64::NAN;
        }

        if humidity < ranges::HUMIDITY_MIN || humidity > ranges::HUMIDITY_MAX {
            temperature = f64::NAN;
        }

        Self {
            station_id,
            timestamp,
            temperature,
            humidity,
        }
    }

    /// Identifier of the station that produced this observation
    pub fn station_id(&self) -> &WigosStationIdentifier {
        &self.station_id
    }

    /// Instant at which the readings were taken
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Air temperature in degrees Celsius, NaN if unusable
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity in percent, NaN if unusable
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Returns true if all readings in this observation are valid.
    pub fn is_valid(&self) -> bool {
        !self.temperature.is_nan() && !self.humidity.is_nan()
    }

    /// Returns true if some of the readings, but not all, are invalid.
    pub fn is_partial(&self) -> bool {
        !self.is_valid() && !self.is_invalid()
    }

    /// Returns true if all readings in this observation are invalid.
    pub fn is_invalid(&self) -> bool {
        self.temperature.is_nan() && self.humidity.is_nan()
    }
}
