// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timer commands.

use crate::command::Command;
use crate::types::FanSpeed;

/// Starts or cancels the fan's override timer.
///
/// While a timer runs the fan holds the requested speed, then returns to its
/// normal operation.
///
/// # Examples
///
/// ```
/// use qstream_lib::command::{Command, TimerCommand};
/// use qstream_lib::types::FanSpeed;
///
/// let boost = TimerCommand::set(15, FanSpeed::MAX, true);
/// assert_eq!(boost.payload(), "TIMER 15 MIN 100% DEMAND CONTROL ON NIGHT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Run the fan at `speed` for `minutes`.
    Set {
        /// Timer duration in minutes.
        minutes: u32,
        /// Airflow to hold while the timer runs.
        speed: FanSpeed,
        /// Whether the air-quality sensor may still adjust the airflow.
        demand_control: bool,
    },
    /// Stop a running timer.
    Cancel,
}

impl TimerCommand {
    /// Creates a command that starts a timer.
    #[must_use]
    pub const fn set(minutes: u32, speed: FanSpeed, demand_control: bool) -> Self {
        Self::Set {
            minutes,
            speed,
            demand_control,
        }
    }

    /// Creates a command that cancels the running timer.
    #[must_use]
    pub const fn cancel() -> Self {
        Self::Cancel
    }
}

impl Command for TimerCommand {
    fn endpoint(&self) -> &'static str {
        "/Timer"
    }

    fn payload(&self) -> String {
        match self {
            // The firmware requires a trailing mode token; NIGHT is accepted
            // regardless of the current schedule.
            Self::Set {
                minutes,
                speed,
                demand_control,
            } => {
                let demand = if *demand_control { "ON" } else { "OFF" };
                format!(
                    "TIMER {minutes} MIN {}% DEMAND CONTROL {demand} NIGHT",
                    speed.value()
                )
            }
            Self::Cancel => "TIMER 0 MIN".to_string(),
        }
    }
}
