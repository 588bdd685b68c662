// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WiFi component handle.

use crate::device::required;
use crate::error::Error;
use crate::method::WifiMethod;
use crate::protocol::{Rpc, RpcResult};
use crate::response::WifiStatus;

/// Handle to the `WiFi` component.
#[derive(Debug)]
pub struct WifiComponent<'a, P: Rpc> {
    rpc: &'a P,
}

impl<'a, P: Rpc> WifiComponent<'a, P> {
    pub(crate) fn new(rpc: &'a P) -> Self {
        Self { rpc }
    }

    /// `WiFi.GetConfig`, undecoded.
    pub async fn config(&self) -> RpcResult {
        self.rpc.send(&WifiMethod::GetConfig).await
    }

    /// Reads the station state.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// response cannot be decoded.
    pub async fn status(&self) -> Result<WifiStatus, Error> {
        self.rpc.send(&WifiMethod::GetStatus).await.parse()
    }

    /// Reads the signal strength in dBm.
    ///
    /// # Errors
    ///
    /// As [`status`](Self::status), plus `ParseError::MissingField` while
    /// the station is not connected.
    pub async fn rssi(&self) -> Result<i32, Error> {
        required(self.status().await?.rssi, "rssi")
    }
}
