// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for communicating with `QStream` devices.
//!
//! The device exposes a small HTTP API: GET requests read a value, POST
//! requests carry a command. Both answer with a `{"Value": "<string>"}`
//! envelope. The [`Protocol`] trait abstracts that exchange so the
//! higher-level [`Device`](crate::Device) can be driven by any transport.
//!
//! Transport failures are reported as [`Error::Connection`] or
//! [`Error::Timeout`]; a reachable device that answers with an unusable
//! payload yields [`Error::Response`].

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use crate::error::{Error, Result};
use crate::response::ValueResponse;

/// Raw response body returned by a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the `Value` envelope and returns the inner string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] with the body attached if it is not a
    /// JSON object with a string `Value` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use qstream_lib::protocol::CommandResponse;
    ///
    /// let response = CommandResponse::new(r#"{"Value": "16"}"#.to_string());
    /// assert_eq!(response.value().unwrap(), "16");
    ///
    /// let broken = CommandResponse::new("<html>".to_string());
    /// assert!(broken.value().is_err());
    /// ```
    pub fn value(&self) -> Result<String> {
        serde_json::from_str::<ValueResponse>(&self.body)
            .map(ValueResponse::into_value)
            .map_err(|e| Error::response(format!("Invalid response format: {e}"), &self.body))
    }
}

/// Trait for transports that can exchange requests with a `QStream` device.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a GET request to `path` (e.g. `"/Status"`).
    ///
    /// # Errors
    ///
    /// Returns `Error` if the request fails or the device rejects it.
    async fn get(&self, path: &str) -> Result<CommandResponse>;

    /// Sends a POST request to `path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `Error` if the request fails or the device rejects it.
    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<CommandResponse>;
}
