// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor and energy meter methods.

use crate::method::{RpcMethod, id_param};

macro_rules! status_config_method {
    ($(#[$meta:meta])* $name:ident, $component:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            /// Component configuration.
            GetConfig {
                /// Component instance.
                id: u8,
            },
            /// Current readings.
            GetStatus {
                /// Component instance.
                id: u8,
            },
        }

        impl RpcMethod for $name {
            fn name(&self) -> &'static str {
                match self {
                    Self::GetConfig { .. } => concat!($component, ".GetConfig"),
                    Self::GetStatus { .. } => concat!($component, ".GetStatus"),
                }
            }

            fn params(&self) -> Vec<(&'static str, String)> {
                match *self {
                    Self::GetConfig { id } | Self::GetStatus { id } => id_param(id),
                }
            }
        }
    };
}

status_config_method!(
    /// Methods of the `Temperature` component (e.g. add-on sensors, Pro3EM).
    TemperatureMethod,
    "Temperature"
);

status_config_method!(
    /// Methods of the `EM` component (three-phase energy meter).
    EmMethod,
    "EM"
);

status_config_method!(
    /// Methods of the `EM1` component (single-phase energy meter).
    Em1Method,
    "EM1"
);
