// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelly RPC method definitions.
//!
//! Each Shelly component exposes methods named `<Component>.<Action>`,
//! called over HTTP as `/rpc/<Component>.<Action>?<params>`.
//!
//! | Method Type | Component | Example |
//! |-------------|-----------|---------|
//! | [`ShellyMethod`] | Device-wide system calls | `Shelly.GetStatus` |
//! | [`WifiMethod`] | WiFi station | `WiFi.GetStatus` |
//! | [`InputMethod`] | Button/switch inputs | `Input.GetStatus?id=0` |
//! | [`SwitchMethod`] | Relay outputs | `Switch.Set?id=0&on=true` |
//! | [`CoverMethod`] | Roller shutters | `Cover.GoToPosition?id=0&pos=50` |
//! | [`TemperatureMethod`] | Temperature sensors | `Temperature.GetStatus?id=0` |
//! | [`EmMethod`] | Three-phase energy meter | `EM.GetStatus?id=0` |
//! | [`Em1Method`] | Single-phase energy meter | `EM1.GetStatus?id=0` |
//!
//! # Examples
//!
//! ```
//! use shelly_rpc::method::{RpcMethod, SwitchMethod};
//!
//! let cmd = SwitchMethod::Set { id: 0, on: true };
//! assert_eq!(cmd.name(), "Switch.Set");
//! assert_eq!(cmd.to_rpc_path(), "Switch.Set?id=0&on=true");
//! ```

mod cover;
mod meter;
mod switch;
mod system;

pub use cover::CoverMethod;
pub use meter::{Em1Method, EmMethod, TemperatureMethod};
pub use switch::{InputMethod, SwitchMethod};
pub use system::{ShellyMethod, WifiMethod};

/// An RPC method that can be called on a Shelly device.
pub trait RpcMethod {
    /// Returns the method name, e.g. `"Switch.GetStatus"`.
    fn name(&self) -> &'static str;

    /// Returns the query parameters in the order they are sent.
    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Returns the method path below `/rpc/`.
    ///
    /// Format: `<name>` or `<name>?<key>=<value>&...`.
    fn to_rpc_path(&self) -> String {
        let params = self.params();
        if params.is_empty() {
            return self.name().to_string();
        }
        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.name())
    }
}

/// Query parameters for methods addressing a single component instance.
pub(crate) fn id_param(id: u8) -> Vec<(&'static str, String)> {
    vec![("id", id.to_string())]
}
