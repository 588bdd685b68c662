// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-wide methods available on every Gen2+ device.

use crate::method::RpcMethod;

/// Methods of the `Shelly` service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellyMethod {
    /// Status of all components.
    GetStatus,
    /// Configuration of all components.
    GetConfig,
    /// Names of all methods the device supports.
    ListMethods,
    /// Model, firmware and authentication information.
    GetDeviceInfo,
    /// Checks for available firmware updates.
    CheckForUpdate,
    /// Lists the components present on the device.
    GetComponents,
}

impl RpcMethod for ShellyMethod {
    fn name(&self) -> &'static str {
        match self {
            Self::GetStatus => "Shelly.GetStatus",
            Self::GetConfig => "Shelly.GetConfig",
            Self::ListMethods => "Shelly.ListMethods",
            Self::GetDeviceInfo => "Shelly.GetDeviceInfo",
            Self::CheckForUpdate => "Shelly.CheckForUpdate",
            Self::GetComponents => "Shelly.GetComponents",
        }
    }
}

/// Methods of the `WiFi` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiMethod {
    /// Station and access point configuration.
    GetConfig,
    /// Connection state, IP address and signal strength.
    GetStatus,
}

impl RpcMethod for WifiMethod {
    fn name(&self) -> &'static str {
        match self {
            Self::GetConfig => "WiFi.GetConfig",
            Self::GetStatus => "WiFi.GetStatus",
        }
    }
}
