//! Parsing of engine timestamps.
//!
//! The engine's wire format is `yyyy-MM-ddTHH:mm:ss[.SSS][offset]`, with
//! the offset written with or without a colon. Values without an offset
//! are interpreted as UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::error::InvalidRequest;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// Parses a date-valued parameter, naming the parameter on failure.
pub fn parse_history_date(
    parameter: &str,
    value: &str,
) -> Result<DateTime<FixedOffset>, InvalidRequest> {
    for format in OFFSET_FORMATS {
        if let Ok(date) = DateTime::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date);
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    Err(InvalidRequest::UnparsableDate {
        parameter: parameter.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_engine_format_without_offset_colon() {
        let date = parse_history_date("startedBefore", "2013-01-23T13:42:45.000+0200").unwrap();
        assert_eq!(date.timezone().local_minus_utc(), 2 * 3600);
        assert_eq!(date.format("%Y-%m-%dT%H:%M:%S").to_string(), "2013-01-23T13:42:45");
    }

    #[test]
    fn test_parses_rfc_3339() {
        let date = parse_history_date("startedBefore", "2013-01-23T13:42:45.123+02:00").unwrap();
        assert_eq!(date.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_parses_without_millis() {
        assert!(parse_history_date("startedBefore", "2013-01-23T13:42:45+0100").is_ok());
    }

    #[test]
    fn test_naive_value_is_utc() {
        let date = parse_history_date("startedBefore", "2013-01-23T13:42:45").unwrap();
        assert_eq!(date.timezone().local_minus_utc(), 0);
    }

    #[test]
    fn test_rejects_garbage_naming_the_parameter() {
        let err = parse_history_date("finishedAfter", "notADate").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot convert value \"notADate\" of parameter \"finishedAfter\" to a date"
        );
    }
}
