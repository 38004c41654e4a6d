// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coercions for single-value endpoints.
//!
//! `/AQI`, `/Levels` and `/DateTime` each answer with one scalar wrapped in
//! the `Value` envelope. These functions turn that string into a typed value,
//! reporting any failure as [`Error::Response`] with the original string
//! attached.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Layout of `/DateTime` values, e.g. `24/10/2025 23:19:05`.
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Parses an air-quality index such as `"16"`.
///
/// # Errors
///
/// Returns [`Error::Response`] if the value is not a base-10 integer.
///
/// # Examples
///
/// ```
/// use qstream_lib::response::parse_air_quality;
///
/// assert_eq!(parse_air_quality("16").unwrap(), 16);
/// assert!(parse_air_quality("not_a_number").is_err());
/// ```
pub fn parse_air_quality(value: &str) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::response(format!("Invalid AQI value: {value}"), value))
}

/// Parses a preset level such as `"38%"`.
///
/// A single trailing `%` is stripped before parsing. On failure the error
/// carries the original, unstripped string.
///
/// # Errors
///
/// Returns [`Error::Response`] if the value is not a base-10 integer,
/// with or without a trailing `%`.
///
/// # Examples
///
/// ```
/// use qstream_lib::response::parse_level;
///
/// assert_eq!(parse_level("38%").unwrap(), 38);
/// assert_eq!(parse_level("38").unwrap(), 38);
/// assert!(parse_level("invalid%").is_err());
/// ```
pub fn parse_level(value: &str) -> Result<i32> {
    let trimmed = value.trim();
    trimmed
        .strip_suffix('%')
        .unwrap_or(trimmed)
        .parse()
        .map_err(|_| Error::response(format!("Invalid level value: {value}"), value))
}

/// Parses the device clock, formatted as `day/month/year hour:minute:second`.
///
/// The device reports local time without an offset, so a naive datetime is
/// returned.
///
/// # Errors
///
/// Returns [`Error::Response`] if the value does not follow [`DATETIME_FORMAT`].
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use qstream_lib::response::parse_datetime;
///
/// let dt = parse_datetime("24/10/2025 23:19:05").unwrap();
/// assert_eq!((dt.day(), dt.month(), dt.year()), (24, 10, 2025));
/// assert_eq!((dt.hour(), dt.minute(), dt.second()), (23, 19, 5));
/// ```
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .map_err(|e| Error::response(format!("Invalid datetime format: {value} ({e})"), value))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn air_quality_valid() {
        assert_eq!(parse_air_quality("16").unwrap(), 16);
        assert_eq!(parse_air_quality("0").unwrap(), 0);
        assert_eq!(parse_air_quality(" 250 ").unwrap(), 250);
        assert_eq!(parse_air_quality("-3").unwrap(), -3);
        assert_eq!(parse_air_quality("70000").unwrap(), 70_000);
    }

    #[test]
    fn air_quality_invalid() {
        for raw in ["not_a_number", "", "16.5", "99999999999"] {
            let err = parse_air_quality(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ResponseFormat);
            assert_eq!(err.raw_response(), Some(raw));
        }
    }

    #[test]
    fn air_quality_error_names_value() {
        let err = parse_air_quality("abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid AQI value: abc");
    }

    #[test]
    fn level_strips_percent() {
        assert_eq!(parse_level("38%").unwrap(), 38);
        assert_eq!(parse_level("100%").unwrap(), 100);
        assert_eq!(parse_level("0").unwrap(), 0);
        assert_eq!(parse_level("300%").unwrap(), 300);
    }

    #[test]
    fn level_invalid_keeps_unstripped_raw() {
        let err = parse_level("invalid%").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseFormat);
        assert_eq!(err.raw_response(), Some("invalid%"));
        assert_eq!(err.to_string(), "Invalid level value: invalid%");
    }

    #[test]
    fn level_only_strips_one_percent() {
        assert!(parse_level("38%%").is_err());
    }

    #[test]
    fn datetime_valid() {
        let dt = parse_datetime("24/10/2025 23:19:05").unwrap();
        assert_eq!(dt.year(), 2025);
        assert_eq!(dt.month(), 10);
        assert_eq!(dt.day(), 24);
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 19);
        assert_eq!(dt.second(), 5);
    }

    #[test]
    fn datetime_invalid() {
        for raw in ["2025-10-24 23:19:05", "24/10/2025", "32/10/2025 23:19:05", "garbage"] {
            let err = parse_datetime(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ResponseFormat);
            assert_eq!(err.raw_response(), Some(raw));
        }
    }
}
