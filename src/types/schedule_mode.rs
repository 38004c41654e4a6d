// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule mode reported by the fan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Time-of-day mode of an enabled schedule.
///
/// Serialized as the literal uppercase tokens the device emits.
///
/// # Examples
///
/// ```
/// use qstream_lib::types::ScheduleMode;
///
/// assert_eq!(ScheduleMode::Day.as_str(), "DAY");
/// assert_eq!("NIGHT".parse::<ScheduleMode>().unwrap(), ScheduleMode::Night);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleMode {
    /// Daytime schedule.
    Day,
    /// Nighttime schedule.
    Night,
}

impl ScheduleMode {
    /// Returns the device token for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Night => "NIGHT",
        }
    }
}

impl fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DAY" => Ok(Self::Day),
            "NIGHT" => Ok(Self::Night),
            _ => Err(ValueError::InvalidScheduleMode(s.to_string())),
        }
    }
}
