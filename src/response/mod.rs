// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed Shelly RPC responses.
//!
//! Shelly devices answer RPC calls with JSON objects. These types decode
//! the fields this library reads; fields a firmware version does not send
//! decode as `None` instead of failing.

mod cover;
mod device_info;
mod meter;
mod switch;
mod wifi;

pub use cover::CoverStatus;
pub use device_info::DeviceInfo;
pub use meter::{Em1Status, EmStatus, TemperatureStatus};
pub use switch::{InputStatus, SwitchSetResponse, SwitchStatus};
pub use wifi::WifiStatus;

use serde::Deserialize;

/// Device temperature as reported inside switch and cover status.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct TemperatureReading {
    /// Temperature in degrees Celsius.
    #[serde(rename = "tC")]
    pub celsius: Option<f64>,

    /// Temperature in degrees Fahrenheit.
    #[serde(rename = "tF")]
    pub fahrenheit: Option<f64>,
}

/// Accumulated active energy counter.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct EnergyCounter {
    /// Total energy in watt-hours.
    #[serde(default)]
    pub total: f64,

    /// Energy per minute for the last three minutes, in milliwatt-hours.
    #[serde(default)]
    pub by_minute: Vec<f64>,
}
