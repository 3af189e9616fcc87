//! Tests for the tolerant per-line parsing loop

use super::{mixed_log_lines, test_station};
use crate::app::services::log_parser::WeatherLogParser;
use chrono::{TimeZone, Utc};

#[test]
fn test_valid_line_produces_observation() {
    let result = WeatherLogParser::parse(&test_station(), ["2025-08-07T10:00:00Z,22.5,58.3"]);

    assert_eq!(result.observations.len(), 1);
    assert!(result.errors.is_empty());

    let obs = &result.observations[0];
    assert_eq!(
        obs.timestamp(),
        Utc.with_ymd_and_hms(2025, 8, 7, 10, 0, 0).unwrap()
    );
    assert_eq!(obs.temperature(), 22.5);
    assert_eq!(obs.humidity(), 58.3);
    assert!(obs.is_valid());
    assert_eq!(obs.station_id(), &test_station());
}

#[test]
fn test_nan_literal_produces_partial_observation() {
    let result = WeatherLogParser::parse(&test_station(), ["2025-08-07T11:00:00Z,NaN,60.1"]);

    assert_eq!(result.observations.len(), 1);
    assert!(result.errors.is_empty());

    let obs = &result.observations[0];
    assert!(obs.temperature().is_nan());
    assert_eq!(obs.humidity(), 60.1);
    assert!(obs.is_partial());
}

#[test]
fn test_infinity_literals_accepted() {
    // "Infinity" and "-Infinity" are valid float text; the range check then
    // normalizes the temperature to NaN.
    let result = WeatherLogParser::parse(
        &test_station(),
        ["2025-08-07T11:00:00Z,Infinity,-Infinity"],
    );

    assert_eq!(result.observations.len(), 1);
    assert!(result.errors.is_empty());
    assert!(result.observations[0].temperature().is_nan());
}

#[test]
fn test_out_of_range_temperature_is_not_an_error() {
    let result = WeatherLogParser::parse(&test_station(), ["2025-08-07T11:00:00Z,200,60.1"]);

    assert!(result.errors.is_empty());
    let obs = &result.observations[0];
    assert!(obs.temperature().is_nan());
    assert!(obs.is_partial());
}

#[test]
fn test_wrong_field_count_recorded_as_error() {
    let result = WeatherLogParser::parse(&test_station(), ["bad,line"]);

    assert!(result.observations.is_empty());
    assert_eq!(result.errors.len(), 1);

    let error = &result.errors[0];
    assert_eq!(error.line_number, 1);
    assert_eq!(error.message, "Line does not contain exactly three parts.");
    assert_eq!(error.line, "bad,line");
    assert_eq!(error.station_id, test_station());
}

#[test]
fn test_bad_timestamp_recorded_as_error() {
    let result = WeatherLogParser::parse(&test_station(), ["not-a-timestamp,1.0,2.0"]);

    assert!(result.observations.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("not-a-timestamp"));
    assert!(result.errors[0].message.contains("timestamp"));
}

#[test]
fn test_bad_float_recorded_as_error() {
    let result = WeatherLogParser::parse(&test_station(), ["2025-08-07T10:00:00Z,warm,58.3"]);

    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("temperature"));
    assert!(result.errors[0].message.contains("'warm'"));

    let result = WeatherLogParser::parse(&test_station(), ["2025-08-07T10:00:00Z,22.5,humid"]);

    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("humidity"));
}

#[test]
fn test_trailing_separator_is_an_empty_field() {
    // A trailing comma still splits into three parts; the empty humidity
    // field is the failure, not the field count.
    let result = WeatherLogParser::parse(&test_station(), ["2025-08-07T10:00:00Z,22.5,"]);

    assert!(result.observations.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("humidity"));
    assert!(result.errors[0].message.contains("''"));
}

#[test]
fn test_fields_are_trimmed() {
    let result =
        WeatherLogParser::parse(&test_station(), [" 2025-08-07T10:00:00Z , 22.5 , 58.3 "]);

    assert_eq!(result.observations.len(), 1);
    assert_eq!(result.observations[0].temperature(), 22.5);
}

#[test]
fn test_every_line_lands_in_exactly_one_sequence() {
    let lines = mixed_log_lines();
    let result = WeatherLogParser::parse(&test_station(), lines.clone());

    assert_eq!(result.total_lines(), lines.len());
    assert_eq!(result.observations.len(), 3);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_parsing_continues_after_errors() {
    // The malformed third line must not stop the fourth from parsing.
    let result = WeatherLogParser::parse(&test_station(), mixed_log_lines());

    assert_eq!(result.errors[0].line_number, 3);
    assert_eq!(result.errors[1].line_number, 5);
    assert_eq!(result.observations[2].temperature(), 21.0);
}

#[test]
fn test_line_numbers_follow_input_order() {
    let result = WeatherLogParser::parse(&test_station(), mixed_log_lines());

    let mut error_lines: Vec<usize> = result.errors.iter().map(|e| e.line_number).collect();
    let sorted = {
        let mut s = error_lines.clone();
        s.sort_unstable();
        s
    };
    assert_eq!(error_lines, sorted);

    error_lines.dedup();
    assert_eq!(error_lines.len(), result.errors.len());
}

#[test]
fn test_parse_is_deterministic() {
    let first = WeatherLogParser::parse(&test_station(), mixed_log_lines());
    let second = WeatherLogParser::parse(&test_station(), mixed_log_lines());

    assert_eq!(first.observations.len(), second.observations.len());
    assert_eq!(first.errors.len(), second.errors.len());

    for (a, b) in first.errors.iter().zip(second.errors.iter()) {
        assert_eq!(a.line_number, b.line_number);
        assert_eq!(a.message, b.message);
        assert_eq!(a.line, b.line);
    }

    for (a, b) in first.observations.iter().zip(second.observations.iter()) {
        assert_eq!(a.timestamp(), b.timestamp());
        assert_eq!(a.temperature().to_bits(), b.temperature().to_bits());
        assert_eq!(a.humidity().to_bits(), b.humidity().to_bits());
    }
}

#[test]
fn test_empty_input_yields_empty_result() {
    let result = WeatherLogParser::parse(&test_station(), Vec::<String>::new());

    assert!(result.observations.is_empty());
    assert!(result.errors.is_empty());
}

#[test]
fn test_result_outlives_input_source() {
    // Feed owned Strings through a consuming iterator; the result must stay
    // usable after the source is gone.
    let lines: Vec<String> = mixed_log_lines().into_iter().map(String::from).collect();
    let result = WeatherLogParser::parse(&test_station(), lines.into_iter());

    assert_eq!(result.total_lines(), 5);
    assert_eq!(result.errors[0].line, "bad,line");
}
