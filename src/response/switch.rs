// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch and input response parsing.

use serde::Deserialize;

use crate::response::{EnergyCounter, TemperatureReading};

/// Response from `Switch.GetStatus`.
///
/// Metering fields are only present on devices with power metering
/// (e.g. Plus1PM, PlusPlugS).
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::SwitchStatus;
///
/// let json = r#"{
///     "id": 0, "source": "init", "output": true,
///     "apower": 41.9, "voltage": 231.3, "current": 0.181,
///     "aenergy": {"total": 12.3, "by_minute": [0, 0, 0], "minute_ts": 1700000000},
///     "temperature": {"tC": 33.1, "tF": 91.6}
/// }"#;
/// let status: SwitchStatus = serde_json::from_str(json).unwrap();
/// assert!(status.output);
/// assert_eq!(status.apower, Some(41.9));
/// assert_eq!(status.temperature_c(), Some(33.1));
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SwitchStatus {
    /// Switch instance.
    #[serde(default)]
    pub id: u8,

    /// What caused the last state change.
    #[serde(default)]
    pub source: String,

    /// Output state.
    #[serde(default)]
    pub output: bool,

    /// Active power in watts.
    #[serde(default)]
    pub apower: Option<f64>,

    /// Supply voltage in volts.
    #[serde(default)]
    pub voltage: Option<f64>,

    /// Current in amperes.
    #[serde(default)]
    pub current: Option<f64>,

    /// Accumulated active energy.
    #[serde(default)]
    pub aenergy: Option<EnergyCounter>,

    /// Device temperature.
    #[serde(default)]
    pub temperature: Option<TemperatureReading>,
}

impl SwitchStatus {
    /// Returns the device temperature in degrees Celsius.
    #[must_use]
    pub fn temperature_c(&self) -> Option<f64> {
        self.temperature.and_then(|t| t.celsius)
    }
}

/// Response from `Switch.Set` and `Switch.Toggle`.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct SwitchSetResponse {
    /// Output state before the call.
    #[serde(default)]
    pub was_on: bool,
}

/// Response from `Input.GetStatus`.
///
/// `state` is `None` for analog inputs and inputs in button mode.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct InputStatus {
    /// Input instance.
    #[serde(default)]
    pub id: u8,

    /// Input state.
    #[serde(default)]
    pub state: Option<bool>,
}
