// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover response parsing.

use serde::Deserialize;

use crate::response::{EnergyCounter, TemperatureReading};

/// Response from `Cover.GetStatus`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::CoverStatus;
///
/// let json = r#"{
///     "id": 0, "source": "limit_switch", "state": "open",
///     "apower": 0.0, "voltage": 231.0, "current": 0.0,
///     "current_pos": 100, "target_pos": null, "pos_control": true,
///     "temperature": {"tC": 41.2, "tF": 106.2}
/// }"#;
/// let status: CoverStatus = serde_json::from_str(json).unwrap();
/// assert_eq!(status.state, "open");
/// assert_eq!(status.current_pos, Some(100));
/// assert_eq!(status.temperature_c(), Some(41.2));
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CoverStatus {
    /// Cover instance.
    #[serde(default)]
    pub id: u8,

    /// What caused the last movement.
    #[serde(default)]
    pub source: String,

    /// Movement state: `open`, `closed`, `opening`, `closing`, `stopped` or `calibrating`.
    #[serde(default)]
    pub state: String,

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

    /// Current position in percent, only on calibrated covers.
    #[serde(default)]
    pub current_pos: Option<u8>,

    /// Target position of an ongoing movement.
    #[serde(default)]
    pub target_pos: Option<u8>,

    /// Whether the cover is calibrated for positioning.
    #[serde(default)]
    pub pos_control: bool,

    /// Device temperature.
    #[serde(default)]
    pub temperature: Option<TemperatureReading>,
}

impl CoverStatus {
    /// Returns the device temperature in degrees Celsius.
    #[must_use]
    pub fn temperature_c(&self) -> Option<f64> {
        self.temperature.and_then(|t| t.celsius)
    }

    /// Returns `true` while the cover is moving.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        matches!(self.state.as_str(), "opening" | "closing")
    }
}
