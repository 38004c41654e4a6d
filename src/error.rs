// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `QStream` library.
//!
//! Every failure that happens while talking to a device, or while decoding
//! what it sent back, is reported as one of three [`Error`] variants:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | [`ErrorKind::Connection`] | The device could not be reached |
//! | [`ErrorKind::Timeout`] | The request exceeded its deadline |
//! | [`ErrorKind::ResponseFormat`] | The device answered, but the payload is unusable |
//!
//! The library never retries. Retry policy belongs to the caller, who can
//! branch on [`Error::kind`].
//!
//! Arguments rejected before any request is made (an out-of-range preset
//! index, a fan speed above 100%) are reported separately as [`ValueError`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The device could not be reached (network or host failure).
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request exceeded the configured timeout, in milliseconds.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The device answered but the payload could not be used.
    ///
    /// Covers rejected responses (non-2xx status), malformed JSON envelopes,
    /// unparsable numerals or datetimes, and missing mandatory fields.
    #[error("{message}")]
    Response {
        /// Description of what went wrong.
        message: String,
        /// The offending raw text, when available.
        raw: Option<String>,
    },
}

/// Discriminant of an [`Error`], for callers that only need the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Connection`].
    Connection,
    /// See [`Error::Timeout`].
    Timeout,
    /// See [`Error::Response`].
    ResponseFormat,
}

impl Error {
    /// Creates a response-format error carrying the offending raw text.
    pub fn response(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Response {
            message: message.into(),
            raw: Some(raw.into()),
        }
    }

    /// Creates a response-format error with no raw text attached.
    pub fn response_without_raw(message: impl Into<String>) -> Self {
        Self::Response {
            message: message.into(),
            raw: None,
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection(_) => ErrorKind::Connection,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Response { .. } => ErrorKind::ResponseFormat,
        }
    }

    /// Returns the raw text that caused a response-format error, if any.
    #[must_use]
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::Response { raw, .. } => raw.as_deref(),
            _ => None,
        }
    }
}

/// Errors raised when constructing a constrained value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A schedule mode token other than `DAY` or `NIGHT`.
    #[error("invalid schedule mode: {0}")]
    InvalidScheduleMode(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
