// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `QStream` Lib - A Rust library to control BUVO `QStream` 2.0 ventilation fans.
//!
//! The fan exposes a local HTTP API where every endpoint answers with a
//! `{"Value": "<string>"}` envelope. This library issues the requests,
//! decodes the compact status line into a [`DeviceStatus`], and reports
//! failures through a small typed [`Error`].
//!
//! # Supported Features
//!
//! - **Status**: timer, schedule, flow percentages, demand control, valve
//! - **Sensors**: air-quality index, nominal flow, device clock
//! - **Presets**: the four configured airflow levels
//! - **Timer control**: start a timed override or cancel it
//!
//! # Quick Start
//!
//! ```no_run
//! use qstream_lib::Device;
//! use qstream_lib::types::FanSpeed;
//!
//! #[tokio::main]
//! async fn main() -> qstream_lib::Result<()> {
//!     let device = Device::http("192.168.1.165").build()?;
//!
//!     let status = device.status().await?;
//!     println!("Current speed: {}%", status.actual_flow());
//!     println!("Air quality: {}", device.air_quality().await?);
//!
//!     device.set_timer(30, FanSpeed::clamped(50), false).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Decoding Without a Device
//!
//! The decoders are plain functions and need no transport:
//!
//! ```
//! use qstream_lib::DeviceStatus;
//!
//! let status: DeviceStatus =
//!     "TIMER ACTIVE 2 MIN Qanalog 0% Qset 38% Qactual 38% DEMAND CONTROL OFF DAY VALVE CLOSED"
//!         .parse()
//!         .unwrap();
//! assert_eq!(status.timer_remaining_minutes(), Some(2));
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{Command, TimerCommand};
pub use device::Device;
#[cfg(feature = "http")]
pub use device::HttpDeviceBuilder;
pub use error::{Error, ErrorKind, Result, ValueError};
pub use protocol::{CommandResponse, Protocol};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use response::{DeviceStatus, ValueResponse};
pub use types::{FanSpeed, LevelIndex, ScheduleMode};
