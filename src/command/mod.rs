// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `QStream` command definitions.
//!
//! Commands are POSTed to a fixed endpoint with a body of the form
//! `{"Value": "<payload>"}`. The payload is a plain-text instruction whose
//! grammar is fixed by the device firmware.
//!
//! # Available Commands
//!
//! | Command Type | Endpoint | Example payload |
//! |-------------|----------|-----------------|
//! | [`TimerCommand`] | `/Timer` | `TIMER 30 MIN 50% DEMAND CONTROL OFF NIGHT` |
//!
//! # Examples
//!
//! ```
//! use qstream_lib::command::{Command, TimerCommand};
//! use qstream_lib::types::FanSpeed;
//!
//! let cmd = TimerCommand::set(30, FanSpeed::new(50).unwrap(), false);
//! assert_eq!(cmd.endpoint(), "/Timer");
//! assert_eq!(cmd.payload(), "TIMER 30 MIN 50% DEMAND CONTROL OFF NIGHT");
//!
//! assert_eq!(TimerCommand::cancel().payload(), "TIMER 0 MIN");
//! ```

mod timer;

pub use timer::TimerCommand;

/// A command that can be POSTed to a `QStream` device.
pub trait Command {
    /// Returns the endpoint path the command is sent to, e.g. `"/Timer"`.
    fn endpoint(&self) -> &'static str;

    /// Returns the exact instruction string the device expects.
    fn payload(&self) -> String;

    /// Returns the JSON request body, `{"Value": <payload>}`.
    fn to_body(&self) -> serde_json::Value {
        serde_json::json!({ "Value": self.payload() })
    }
}
