// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for `QStream` fan control.
//!
//! Constrained types check their range at construction time, so an invalid
//! argument is rejected before any request reaches the device.
//!
//! # Types
//!
//! - [`FanSpeed`] - Requested airflow (0-100%)
//! - [`LevelIndex`] - Preset level slot (1-4)
//! - [`ScheduleMode`] - `DAY` or `NIGHT` schedule mode

mod fan_speed;
mod level_index;
mod schedule_mode;

pub use fan_speed::FanSpeed;
pub use level_index::LevelIndex;
pub use schedule_mode::ScheduleMode;
