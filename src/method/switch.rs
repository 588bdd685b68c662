// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch (relay output) and input methods.

use crate::method::{RpcMethod, id_param};

/// Methods of the `Switch` component.
///
/// # Examples
///
/// ```
/// use shelly_rpc::method::{RpcMethod, SwitchMethod};
///
/// assert_eq!(
///     SwitchMethod::Set { id: 0, on: false }.to_rpc_path(),
///     "Switch.Set?id=0&on=false"
/// );
/// assert_eq!(SwitchMethod::Toggle { id: 1 }.to_rpc_path(), "Switch.Toggle?id=1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchMethod {
    /// Turns the output on or off.
    Set {
        /// Switch instance.
        id: u8,
        /// Desired output state.
        on: bool,
    },
    /// Inverts the output state.
    Toggle {
        /// Switch instance.
        id: u8,
    },
    /// Switch configuration.
    GetConfig {
        /// Switch instance.
        id: u8,
    },
    /// Output state and power metering.
    GetStatus {
        /// Switch instance.
        id: u8,
    },
}

impl RpcMethod for SwitchMethod {
    fn name(&self) -> &'static str {
        match self {
            Self::Set { .. } => "Switch.Set",
            Self::Toggle { .. } => "Switch.Toggle",
            Self::GetConfig { .. } => "Switch.GetConfig",
            Self::GetStatus { .. } => "Switch.GetStatus",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match *self {
            Self::Set { id, on } => vec![("id", id.to_string()), ("on", on.to_string())],
            Self::Toggle { id } | Self::GetConfig { id } | Self::GetStatus { id } => id_param(id),
        }
    }
}

/// Methods of the `Input` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    /// Input configuration.
    GetConfig {
        /// Input instance.
        id: u8,
    },
    /// Input state.
    GetStatus {
        /// Input instance.
        id: u8,
    },
}

impl RpcMethod for InputMethod {
    fn name(&self) -> &'static str {
        match self {
            Self::GetConfig { .. } => "Input.GetConfig",
            Self::GetStatus { .. } => "Input.GetStatus",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match *self {
            Self::GetConfig { id } | Self::GetStatus { id } => id_param(id),
        }
    }
}
