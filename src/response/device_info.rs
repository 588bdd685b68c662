// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Shelly.GetDeviceInfo` response parsing.

use serde::Deserialize;

/// Response from `Shelly.GetDeviceInfo`.
///
/// This call is always answered without authentication, which makes it
/// suitable for probing a device before credentials are known.
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::DeviceInfo;
///
/// let json = r#"{
///     "name": null,
///     "id": "shellyplus2pm-a8032ab12345",
///     "mac": "A8032AB12345",
///     "model": "SNSW-102P16EU",
///     "gen": 2,
///     "fw_id": "20231107-164738/1.0.8-g8c7bb8d",
///     "ver": "1.0.8",
///     "app": "Plus2PM",
///     "auth_en": true,
///     "auth_domain": "shellyplus2pm-a8032ab12345",
///     "profile": "cover"
/// }"#;
/// let info: DeviceInfo = serde_json::from_str(json).unwrap();
/// assert_eq!(info.app, "Plus2PM");
/// assert_eq!(info.profile.as_deref(), Some("cover"));
/// assert!(info.auth_en);
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DeviceInfo {
    /// User-assigned device name.
    #[serde(default)]
    pub name: Option<String>,

    /// Device identifier, e.g. `shellyplus1pm-a8032ab12345`.
    #[serde(default)]
    pub id: String,

    /// MAC address.
    #[serde(default)]
    pub mac: String,

    /// Hardware model code, e.g. `SNSW-001P16EU`.
    #[serde(default)]
    pub model: String,

    /// Device generation.
    #[serde(rename = "gen", default)]
    pub generation: u8,

    /// Firmware build identifier.
    #[serde(default)]
    pub fw_id: String,

    /// Firmware version.
    #[serde(default)]
    pub ver: String,

    /// Application name, e.g. `Plus1PM`, `Pro3EM`.
    #[serde(default)]
    pub app: String,

    /// Whether authentication is enabled.
    #[serde(default)]
    pub auth_en: bool,

    /// Authentication realm, when authentication is enabled.
    #[serde(default)]
    pub auth_domain: Option<String>,

    /// Active device profile, e.g. `cover`, `switch`, `triphase`.
    #[serde(default)]
    pub profile: Option<String>,
}
