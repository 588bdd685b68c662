// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WiFi.GetStatus` response parsing.

use serde::Deserialize;

/// Response from `WiFi.GetStatus`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::WifiStatus;
///
/// let json = r#"{"sta_ip":"192.168.178.210","status":"got ip","ssid":"home","rssi":-51}"#;
/// let status: WifiStatus = serde_json::from_str(json).unwrap();
/// assert_eq!(status.rssi, Some(-51));
/// assert!(status.is_connected());
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WifiStatus {
    /// IP address of the station interface.
    #[serde(default)]
    pub sta_ip: Option<String>,

    /// Connection state: `disconnected`, `connecting`, `connected` or `got ip`.
    #[serde(default)]
    pub status: String,

    /// Network name.
    #[serde(default)]
    pub ssid: Option<String>,

    /// Signal strength in dBm.
    #[serde(default)]
    pub rssi: Option<i32>,
}

impl WifiStatus {
    /// Returns `true` once the station has an IP address.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status == "got ip"
    }
}
