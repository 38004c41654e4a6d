// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response decoding for `QStream` endpoints.
//!
//! Every endpoint answers with the same JSON envelope, `{"Value": "<string>"}`.
//! [`ValueResponse`] deserializes the envelope; the functions and types in
//! this module turn the inner string into typed values.

mod scalar;
mod status;

pub use scalar::{DATETIME_FORMAT, parse_air_quality, parse_datetime, parse_level};
pub use status::DeviceStatus;

use serde::{Deserialize, Serialize};

/// The `{"Value": ...}` envelope shared by every endpoint.
///
/// # Examples
///
/// ```
/// use qstream_lib::response::ValueResponse;
///
/// let response: ValueResponse = serde_json::from_str(r#"{"Value": "70%"}"#).unwrap();
/// assert_eq!(response.value(), "70%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueResponse {
    #[serde(rename = "Value")]
    value: String,
}

impl ValueResponse {
    /// Wraps a value in the envelope.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the envelope and returns the inner value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_roundtrip_uses_capitalized_key() {
        let json = serde_json::to_string(&ValueResponse::new("TIMER 0 MIN")).unwrap();
        assert_eq!(json, r#"{"Value":"TIMER 0 MIN"}"#);
    }

    #[test]
    fn envelope_ignores_extra_fields() {
        let response: ValueResponse =
            serde_json::from_str(r#"{"Value": "16", "Unit": "AQI"}"#).unwrap();
        assert_eq!(response.into_value(), "16");
    }

    #[test]
    fn envelope_requires_value() {
        assert!(serde_json::from_str::<ValueResponse>(r#"{"value": "16"}"#).is_err());
    }
}
