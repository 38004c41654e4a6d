// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction for `QStream` fans.
//!
//! [`Device`] maps each fan operation onto its endpoint and decodes the
//! answer into a typed value. It is generic over the [`Protocol`], so tests
//! and alternative transports can stand in for HTTP.
//!
//! ```no_run
//! use qstream_lib::Device;
//! use qstream_lib::types::FanSpeed;
//!
//! # async fn example() -> qstream_lib::Result<()> {
//! let device = Device::http("192.168.1.100").build()?;
//!
//! let status = device.status().await?;
//! println!("Actual flow: {}%", status.actual_flow());
//!
//! // Boost for 30 minutes
//! device.set_timer(30, FanSpeed::MAX, false).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;

#[cfg(feature = "http")]
pub use http_builder::HttpDeviceBuilder;

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::command::{Command, TimerCommand};
use crate::error::Result;
use crate::protocol::{CommandResponse, Protocol};
use crate::response::{DeviceStatus, parse_air_quality, parse_datetime, parse_level};
use crate::types::{FanSpeed, LevelIndex};

/// A `QStream` ventilation fan.
///
/// Cloning a device is cheap; clones share the underlying transport.
#[derive(Debug)]
pub struct Device<P: Protocol> {
    protocol: Arc<P>,
}

impl<P: Protocol> Clone for Device<P> {
    fn clone(&self) -> Self {
        Self {
            protocol: Arc::clone(&self.protocol),
        }
    }
}

#[cfg(feature = "http")]
impl Device<crate::protocol::HttpClient> {
    /// Creates a builder for an HTTP device.
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpDeviceBuilder {
        HttpDeviceBuilder::new(crate::protocol::HttpConfig::new(host))
    }

    /// Creates a builder from a complete HTTP configuration.
    #[must_use]
    pub fn http_config(config: crate::protocol::HttpConfig) -> HttpDeviceBuilder {
        HttpDeviceBuilder::new(config)
    }
}

impl<P: Protocol> Device<P> {
    /// Creates a device on top of an existing transport.
    pub fn new(protocol: P) -> Self {
        Self {
            protocol: Arc::new(protocol),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Fetches `path` and returns the string inside the `Value` envelope.
    async fn get_value(&self, path: &str) -> Result<String> {
        self.protocol.get(path).await?.value()
    }

    // ========== Queries ==========

    /// Reads and decodes the current fan status.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the status line lacks the flow
    /// values.
    pub async fn status(&self) -> Result<DeviceStatus> {
        let raw = self.get_value("/Status").await?;
        DeviceStatus::parse(&raw)
    }

    /// Reads the air-quality index measured by the fan's sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is not an integer.
    pub async fn air_quality(&self) -> Result<i32> {
        let raw = self.get_value("/AQI").await?;
        parse_air_quality(&raw)
    }

    /// Reads the nominal flow rate, returned as reported (e.g. `"70%"`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn nominal_flow(&self) -> Result<String> {
        self.get_value("/Qnom").await
    }

    /// Reads the device clock.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the datetime is malformed.
    pub async fn datetime(&self) -> Result<NaiveDateTime> {
        let raw = self.get_value("/DateTime").await?;
        parse_datetime(&raw)
    }

    /// Reads one preset level as a percentage.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is not an integer.
    pub async fn level(&self, index: LevelIndex) -> Result<i32> {
        let raw = self.get_value(&format!("/Levels?index={index}")).await?;
        parse_level(&raw)
    }

    /// Reads all four preset levels, in index order.
    ///
    /// Requests are sent one after another; the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns error if any level cannot be read.
    pub async fn levels(&self) -> Result<Vec<(LevelIndex, i32)>> {
        let mut levels = Vec::with_capacity(usize::from(LevelIndex::MAX));
        for index in LevelIndex::all() {
            levels.push((index, self.level(index).await?));
        }
        Ok(levels)
    }

    // ========== Commands ==========

    /// Sends a command to the device.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn send_command<C: Command>(&self, command: &C) -> Result<CommandResponse> {
        let payload = command.payload();
        tracing::debug!(endpoint = command.endpoint(), payload = %payload, "Sending command");
        self.protocol
            .post(command.endpoint(), &command.to_body())
            .await
    }

    /// Runs the fan at `speed` for `minutes`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_timer(
        &self,
        minutes: u32,
        speed: FanSpeed,
        demand_control: bool,
    ) -> Result<CommandResponse> {
        self.send_command(&TimerCommand::set(minutes, speed, demand_control))
            .await
    }

    /// Cancels the running timer.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn cancel_timer(&self) -> Result<CommandResponse> {
        self.send_command(&TimerCommand::cancel()).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::{Error, ErrorKind};

    /// In-memory transport answering GETs from a fixed table.
    #[derive(Debug, Default)]
    struct FakeProtocol {
        bodies: HashMap<String, String>,
        posted: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl FakeProtocol {
        fn with_value(mut self, path: &str, value: &str) -> Self {
            self.bodies.insert(
                path.to_string(),
                serde_json::json!({ "Value": value }).to_string(),
            );
            self
        }
    }

    impl Protocol for FakeProtocol {
        async fn get(&self, path: &str) -> Result<CommandResponse> {
            self.bodies
                .get(path)
                .map(|body| CommandResponse::new(body.clone()))
                .ok_or_else(|| Error::Connection(format!("no route for {path}")))
        }

        async fn post(&self, path: &str, body: &serde_json::Value) -> Result<CommandResponse> {
            self.posted
                .lock()
                .unwrap()
                .push((path.to_string(), body.clone()));
            Ok(CommandResponse::new(body.to_string()))
        }
    }

    #[tokio::test]
    async fn status_is_decoded() {
        let device = Device::new(FakeProtocol::default().with_value(
            "/Status",
            "TIMER INACTIVE SCHEDULE OFF Qanalog 0% Qset 20% Qactual 20% DEMAND CONTROL ON DAY VALVE CLOSED",
        ));

        let status = device.status().await.unwrap();
        assert_eq!(status.set_flow(), 20);
        assert_eq!(status.actual_flow(), 20);
        assert!(status.demand_control_enabled());
    }

    #[tokio::test]
    async fn scalar_queries() {
        let device = Device::new(
            FakeProtocol::default()
                .with_value("/AQI", "16")
                .with_value("/Qnom", "70%")
                .with_value("/DateTime", "24/10/2025 23:19:05"),
        );

        assert_eq!(device.air_quality().await.unwrap(), 16);
        assert_eq!(device.nominal_flow().await.unwrap(), "70%");
        assert_eq!(
            device.datetime().await.unwrap().to_string(),
            "2025-10-24 23:19:05"
        );
    }

    #[tokio::test]
    async fn levels_are_read_in_order() {
        let device = Device::new(
            FakeProtocol::default()
                .with_value("/Levels?index=1", "20%")
                .with_value("/Levels?index=2", "38%")
                .with_value("/Levels?index=3", "60%")
                .with_value("/Levels?index=4", "100%"),
        );

        let levels: Vec<i32> = device
            .levels()
            .await
            .unwrap()
            .into_iter()
            .map(|(_, level)| level)
            .collect();
        assert_eq!(levels, vec![20, 38, 60, 100]);
    }

    #[tokio::test]
    async fn levels_stop_at_first_failure() {
        let device = Device::new(
            FakeProtocol::default()
                .with_value("/Levels?index=1", "20%")
                .with_value("/Levels?index=2", "broken"),
        );

        let err = device.levels().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseFormat);
        assert_eq!(err.raw_response(), Some("broken"));
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let device = Device::new(FakeProtocol::default());
        let err = device.status().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connection);
    }

    #[tokio::test]
    async fn timer_commands_are_posted() {
        let device = Device::new(FakeProtocol::default());

        device
            .set_timer(30, FanSpeed::new(50).unwrap(), false)
            .await
            .unwrap();
        device.cancel_timer().await.unwrap();

        let posted = device.protocol().posted.lock().unwrap().clone();
        assert_eq!(
            posted,
            vec![
                (
                    "/Timer".to_string(),
                    serde_json::json!({ "Value": "TIMER 30 MIN 50% DEMAND CONTROL OFF NIGHT" })
                ),
                (
                    "/Timer".to_string(),
                    serde_json::json!({ "Value": "TIMER 0 MIN" })
                ),
            ]
        );
    }

    #[tokio::test]
    async fn clones_share_transport() {
        let device = Device::new(FakeProtocol::default());
        let clone = device.clone();

        clone.cancel_timer().await.unwrap();
        assert_eq!(device.protocol().posted.lock().unwrap().len(), 1);
    }
}
