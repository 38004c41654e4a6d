// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status line decoding.
//!
//! The `/Status` endpoint answers with a single space-delimited line of
//! keyword-tagged fields, for example:
//!
//! ```text
//! TIMER ACTIVE 2 MIN Qanalog 0% Qset 38% Qactual 38% DEMAND CONTROL OFF DAY VALVE CLOSED
//! ```
//!
//! Firmware revisions reorder and omit fields, so the line is not parsed as a
//! grammar. Each field is searched for independently over the whole string,
//! and only the fields found are set. The three flow percentages are the only
//! mandatory fields.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::types::ScheduleMode;

const TIMER_ACTIVE: &str = "TIMER ACTIVE";
const SCHEDULE_ON: &str = "SCHEDULE ON";
const DEMAND_CONTROL_ON: &str = "DEMAND CONTROL ON";
const VALVE_OPEN: &str = "VALVE OPEN";

static TIMER_MINUTES: LazyLock<Regex> = LazyLock::new(|| pattern(r"TIMER ACTIVE ([0-9]+) MIN"));
static SCHEDULE_MINUTES: LazyLock<Regex> = LazyLock::new(|| pattern(r"SCHEDULE ON ([0-9]+) MIN"));
static ANALOG_FLOW: LazyLock<Regex> = LazyLock::new(|| pattern(r"Qanalog ([0-9]+)%"));
static SET_FLOW: LazyLock<Regex> = LazyLock::new(|| pattern(r"Qset ([0-9]+)%"));
static ACTUAL_FLOW: LazyLock<Regex> = LazyLock::new(|| pattern(r"Qactual ([0-9]+)%"));

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("status pattern is a valid regex literal")
}

/// Decoded state of the fan, as reported by the `/Status` endpoint.
///
/// A value is built in one go by [`DeviceStatus::parse`] and never changes
/// afterwards. Minute counts and the schedule mode are `None` when the device
/// did not report them, which is distinct from a zero duration.
///
/// # Examples
///
/// ```
/// use qstream_lib::response::DeviceStatus;
/// use qstream_lib::types::ScheduleMode;
///
/// let raw = "TIMER INACTIVE SCHEDULE ON 25 MIN Qanalog 0% Qset 28% Qactual 28% \
///            DEMAND CONTROL ON NIGHT VALVE CLOSED";
/// let status = DeviceStatus::parse(raw).unwrap();
///
/// assert!(!status.timer_active());
/// assert!(status.schedule_enabled());
/// assert_eq!(status.schedule_remaining_minutes(), Some(25));
/// assert_eq!(status.schedule_mode(), Some(ScheduleMode::Night));
/// assert_eq!(status.set_flow(), 28);
/// assert_eq!(status.raw_value(), raw);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    timer_active: bool,
    timer_remaining_minutes: Option<u32>,
    schedule_enabled: bool,
    schedule_remaining_minutes: Option<u32>,
    schedule_mode: Option<ScheduleMode>,
    analog_flow: u8,
    set_flow: u8,
    actual_flow: u8,
    demand_control_enabled: bool,
    valve_open: bool,
    raw_value: String,
}

impl DeviceStatus {
    /// Decodes a raw status line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] with the input attached when any of the
    /// `Qanalog`, `Qset` or `Qactual` fields is missing (message
    /// `"Missing required flow values"`), or when a captured numeral does not
    /// fit its field.
    pub fn parse(raw_value: &str) -> Result<Self> {
        // Presence of the flow fields is checked before any numeral is
        // converted, so a missing field always reports as such.
        let (Some(analog_flow), Some(set_flow), Some(actual_flow)) = (
            find_digits(&ANALOG_FLOW, raw_value),
            find_digits(&SET_FLOW, raw_value),
            find_digits(&ACTUAL_FLOW, raw_value),
        ) else {
            tracing::warn!(raw = %raw_value, "Status line is missing flow values");
            return Err(Error::response("Missing required flow values", raw_value));
        };

        let timer_active = raw_value.contains(TIMER_ACTIVE);
        let timer_remaining_minutes = find_digits(&TIMER_MINUTES, raw_value)
            .map(|digits| to_number(digits, raw_value))
            .transpose()?;
        if timer_active && timer_remaining_minutes.is_none() {
            tracing::debug!(raw = %raw_value, "Timer active without remaining minutes");
        }

        let schedule_enabled = raw_value.contains(SCHEDULE_ON);
        let schedule_remaining_minutes = find_digits(&SCHEDULE_MINUTES, raw_value)
            .map(|digits| to_number(digits, raw_value))
            .transpose()?;

        // DAY is checked first, so a line carrying both tokens resolves to DAY.
        let schedule_mode = if !schedule_enabled {
            None
        } else if raw_value.contains(ScheduleMode::Day.as_str()) {
            Some(ScheduleMode::Day)
        } else if raw_value.contains(ScheduleMode::Night.as_str()) {
            Some(ScheduleMode::Night)
        } else {
            None
        };

        Ok(Self {
            timer_active,
            timer_remaining_minutes,
            schedule_enabled,
            schedule_remaining_minutes,
            schedule_mode,
            analog_flow: to_number(analog_flow, raw_value)?,
            set_flow: to_number(set_flow, raw_value)?,
            actual_flow: to_number(actual_flow, raw_value)?,
            demand_control_enabled: raw_value.contains(DEMAND_CONTROL_ON),
            valve_open: raw_value.contains(VALVE_OPEN),
            raw_value: raw_value.to_string(),
        })
    }

    /// Returns whether a timer is currently running.
    #[must_use]
    pub const fn timer_active(&self) -> bool {
        self.timer_active
    }

    /// Returns the minutes left on the timer, if reported.
    ///
    /// Always `None` when [`timer_active`](Self::timer_active) is `false`.
    #[must_use]
    pub const fn timer_remaining_minutes(&self) -> Option<u32> {
        self.timer_remaining_minutes
    }

    /// Returns whether the schedule is enabled.
    #[must_use]
    pub const fn schedule_enabled(&self) -> bool {
        self.schedule_enabled
    }

    /// Returns the minutes until the next schedule event, if reported.
    #[must_use]
    pub const fn schedule_remaining_minutes(&self) -> Option<u32> {
        self.schedule_remaining_minutes
    }

    /// Returns the schedule mode, if the schedule is enabled and a mode was reported.
    #[must_use]
    pub const fn schedule_mode(&self) -> Option<ScheduleMode> {
        self.schedule_mode
    }

    /// Returns the analog input flow percentage.
    #[must_use]
    pub const fn analog_flow(&self) -> u8 {
        self.analog_flow
    }

    /// Returns the target flow percentage.
    #[must_use]
    pub const fn set_flow(&self) -> u8 {
        self.set_flow
    }

    /// Returns the measured flow percentage.
    #[must_use]
    pub const fn actual_flow(&self) -> u8 {
        self.actual_flow
    }

    /// Returns whether the fan follows its air-quality sensor.
    #[must_use]
    pub const fn demand_control_enabled(&self) -> bool {
        self.demand_control_enabled
    }

    /// Returns `true` if the valve is open.
    #[must_use]
    pub const fn valve_open(&self) -> bool {
        self.valve_open
    }

    /// Returns the undecoded status line.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }
}

impl FromStr for DeviceStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Serialized form of [`DeviceStatus`], checked against its `raw_value`.
#[derive(Deserialize)]
struct StatusRecord {
    timer_active: bool,
    timer_remaining_minutes: Option<u32>,
    schedule_enabled: bool,
    schedule_remaining_minutes: Option<u32>,
    schedule_mode: Option<ScheduleMode>,
    analog_flow: u8,
    set_flow: u8,
    actual_flow: u8,
    demand_control_enabled: bool,
    valve_open: bool,
    raw_value: String,
}

/// Deserialization re-decodes `raw_value` and rejects records whose fields
/// disagree with it.
impl<'de> Deserialize<'de> for DeviceStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = StatusRecord::deserialize(deserializer)?;
        let decoded = Self::parse(&record.raw_value).map_err(serde::de::Error::custom)?;

        let stored = Self {
            timer_active: record.timer_active,
            timer_remaining_minutes: record.timer_remaining_minutes,
            schedule_enabled: record.schedule_enabled,
            schedule_remaining_minutes: record.schedule_remaining_minutes,
            schedule_mode: record.schedule_mode,
            analog_flow: record.analog_flow,
            set_flow: record.set_flow,
            actual_flow: record.actual_flow,
            demand_control_enabled: record.demand_control_enabled,
            valve_open: record.valve_open,
            raw_value: record.raw_value,
        };
        if stored != decoded {
            return Err(serde::de::Error::custom(
                "status fields do not match raw_value",
            ));
        }
        Ok(decoded)
    }
}

/// Returns the digits captured by the first match of `re`, if any.
fn find_digits<'h>(re: &Regex, raw_value: &'h str) -> Option<&'h str> {
    re.captures(raw_value)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str())
}

/// Converts captured digits, reporting overflow as a response-format error.
fn to_number<T>(digits: &str, raw_value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    digits.parse().map_err(|e| {
        Error::response(format!("Failed to parse status string: {e}"), raw_value)
    })
}
