// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP device builder.

use std::time::Duration;

use crate::device::Device;
use crate::error::Result;
use crate::protocol::{HttpClient, HttpConfig};

/// Builder for creating HTTP-based devices.
///
/// This builder can be created in two ways:
/// - `Device::http("host")` - Simple host string
/// - `Device::http_config(HttpConfig::new("host").with_timeout(..))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use qstream_lib::Device;
///
/// # fn example() -> qstream_lib::Result<()> {
/// let device = Device::http("192.168.1.100")
///     .with_timeout(Duration::from_secs(5))
///     .build()?;
///
/// // Share one connection pool across several fans
/// let shared = reqwest::Client::new();
/// let kitchen = Device::http("192.168.1.101")
///     .with_client(shared.clone())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpDeviceBuilder {
    config: HttpConfig,
}

impl HttpDeviceBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Uses an existing `reqwest` client instead of creating one.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.config = self.config.with_client(client);
        self
    }

    /// Returns the configuration the device will be built with.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the device.
    ///
    /// No request is made; the first network access happens on the first
    /// device operation.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> Result<Device<HttpClient>> {
        let client = self.config.into_client()?;
        Ok(Device::new(client))
    }
}
