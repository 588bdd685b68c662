// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature sensor and energy meter response parsing.

use serde::Deserialize;

/// Response from `Temperature.GetStatus`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::TemperatureStatus;
///
/// let status: TemperatureStatus =
///     serde_json::from_str(r#"{"id": 0, "tC": 27.5, "tF": 81.5}"#).unwrap();
/// assert_eq!(status.celsius, Some(27.5));
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TemperatureStatus {
    /// Sensor instance.
    #[serde(default)]
    pub id: u8,

    /// Temperature in degrees Celsius.
    #[serde(rename = "tC", default)]
    pub celsius: Option<f64>,

    /// Temperature in degrees Fahrenheit.
    #[serde(rename = "tF", default)]
    pub fahrenheit: Option<f64>,
}

/// Response from `EM.GetStatus` (three-phase meter).
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::EmStatus;
///
/// let json = r#"{
///     "id": 0,
///     "a_current": 0.4, "a_voltage": 230.1, "a_act_power": 60.2, "a_aprt_power": 90.0,
///     "b_current": 0.3, "b_voltage": 231.0, "b_act_power": 40.1, "b_aprt_power": 70.4,
///     "c_current": 0.2, "c_voltage": 229.7, "c_act_power": 33.4, "c_aprt_power": 80.3,
///     "n_current": null,
///     "total_current": 0.9, "total_act_power": 133.79, "total_aprt_power": 240.765,
///     "user_calibrated_phase": []
/// }"#;
/// let status: EmStatus = serde_json::from_str(json).unwrap();
/// assert_eq!(status.total_act_power, Some(133.79));
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EmStatus {
    /// Meter instance.
    #[serde(default)]
    pub id: u8,

    /// Phase A current in amperes.
    #[serde(default)]
    pub a_current: Option<f64>,
    /// Phase A voltage in volts.
    #[serde(default)]
    pub a_voltage: Option<f64>,
    /// Phase A active power in watts.
    #[serde(default)]
    pub a_act_power: Option<f64>,

    /// Phase B current in amperes.
    #[serde(default)]
    pub b_current: Option<f64>,
    /// Phase B voltage in volts.
    #[serde(default)]
    pub b_voltage: Option<f64>,
    /// Phase B active power in watts.
    #[serde(default)]
    pub b_act_power: Option<f64>,

    /// Phase C current in amperes.
    #[serde(default)]
    pub c_current: Option<f64>,
    /// Phase C voltage in volts.
    #[serde(default)]
    pub c_voltage: Option<f64>,
    /// Phase C active power in watts.
    #[serde(default)]
    pub c_act_power: Option<f64>,

    /// Sum of phase currents in amperes.
    #[serde(default)]
    pub total_current: Option<f64>,

    /// Sum of active power in watts.
    #[serde(default)]
    pub total_act_power: Option<f64>,

    /// Sum of apparent power in volt-amperes.
    #[serde(default)]
    pub total_aprt_power: Option<f64>,
}

/// Response from `EM1.GetStatus` (single-phase meter).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Em1Status {
    /// Meter instance.
    #[serde(default)]
    pub id: u8,

    /// Current in amperes.
    #[serde(default)]
    pub current: Option<f64>,

    /// Voltage in volts.
    #[serde(default)]
    pub voltage: Option<f64>,

    /// Active power in watts.
    #[serde(default)]
    pub act_power: Option<f64>,

    /// Apparent power in volt-amperes.
    #[serde(default)]
    pub aprt_power: Option<f64>,

    /// Power factor.
    #[serde(default)]
    pub pf: Option<f64>,

    /// Network frequency in hertz.
    #[serde(default)]
    pub freq: Option<f64>,
}
