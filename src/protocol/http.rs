// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for `QStream` devices.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::{Error, Result};
use crate::protocol::{CommandResponse, Protocol};

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for an HTTP `QStream` device.
///
/// # Examples
///
/// ```
/// use qstream_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.100");
/// assert_eq!(config.base_url(), "http://192.168.1.100");
///
/// let config = HttpConfig::new("http://192.168.1.100/")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.100");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// `http://` is assumed when `host` has no scheme, and a trailing `/` is
    /// removed.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            base_url: normalize_host(host.into()),
            timeout: Self::DEFAULT_TIMEOUT,
            client: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses an existing `reqwest` client, sharing its connection pool.
    ///
    /// The configured timeout is still applied to every request.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Returns the base URL, including the scheme.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether an externally supplied client will be used.
    #[must_use]
    pub fn has_shared_client(&self) -> bool {
        self.client.is_some()
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Connection(format!("failed to create HTTP client: {e}")))?,
        };

        Ok(HttpClient {
            base_url: self.base_url,
            client,
            timeout: self.timeout,
        })
    }
}

fn normalize_host(host: String) -> String {
    let url = if host.starts_with("http://") || host.starts_with("https://") {
        host
    } else {
        format!("http://{host}")
    };
    url.trim_end_matches('/').to_string()
}

// ============================================================================
// HttpClient - reqwest-backed transport
// ============================================================================

/// HTTP client for communicating with `QStream` devices.
///
/// # Examples
///
/// ```no_run
/// use qstream_lib::protocol::{HttpClient, Protocol};
///
/// # async fn example() -> qstream_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.100")?;
/// let response = client.get("/Status").await?;
/// println!("{}", response.value()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the URL for an endpoint path.
    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a prepared request and checks its status.
    async fn execute(&self, request: RequestBuilder) -> Result<CommandResponse> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to read rejected response body");
                    None
                }
            };
            tracing::debug!(status = status.as_u16(), "HTTP request rejected");
            return Err(Error::Response {
                message: format!(
                    "HTTP {} - {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
                raw: body,
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }

    /// Maps a `reqwest` failure onto the transport error kinds.
    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            tracing::debug!(error = %err, "HTTP request timed out");
            Error::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            tracing::debug!(error = %err, "HTTP request failed");
            Error::Connection(err.to_string())
        }
    }
}

impl Protocol for HttpClient {
    async fn get(&self, path: &str) -> Result<CommandResponse> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, "Sending HTTP GET");

        self.execute(self.client.get(&url)).await
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<CommandResponse> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, body = %body, "Sending HTTP POST");

        self.execute(self.client.post(&url).json(body)).await
    }
}
