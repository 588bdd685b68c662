// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch and input component handles.

use crate::device::required;
use crate::error::Error;
use crate::method::{InputMethod, SwitchMethod};
use crate::protocol::{Rpc, RpcResult};
use crate::response::{InputStatus, SwitchSetResponse, SwitchStatus};

/// Handle to one `Switch` component.
///
/// Obtained from [`Device::switch`](crate::Device::switch).
#[derive(Debug)]
pub struct SwitchComponent<'a, P: Rpc> {
    rpc: &'a P,
    id: u8,
}

impl<'a, P: Rpc> SwitchComponent<'a, P> {
    pub(crate) fn new(rpc: &'a P, id: u8) -> Self {
        Self { rpc, id }
    }

    /// Returns the switch instance.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Turns the output on or off.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// response cannot be decoded.
    pub async fn set(&self, on: bool) -> Result<SwitchSetResponse, Error> {
        let id = self.id;
        self.rpc.send(&SwitchMethod::Set { id, on }).await.parse()
    }

    /// Turns the output on.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub async fn on(&self) -> Result<SwitchSetResponse, Error> {
        self.set(true).await
    }

    /// Turns the output off.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub async fn off(&self) -> Result<SwitchSetResponse, Error> {
        self.set(false).await
    }

    /// Inverts the output.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub async fn toggle(&self) -> Result<SwitchSetResponse, Error> {
        self.rpc
            .send(&SwitchMethod::Toggle { id: self.id })
            .await
            .parse()
    }

    /// `Switch.GetConfig`, undecoded.
    pub async fn config(&self) -> RpcResult {
        self.rpc.send(&SwitchMethod::GetConfig { id: self.id }).await
    }

    /// Reads output state and metering values.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// response cannot be decoded.
    pub async fn status(&self) -> Result<SwitchStatus, Error> {
        self.rpc
            .send(&SwitchMethod::GetStatus { id: self.id })
            .await
            .parse()
    }

    /// Reads the active power in watts.
    ///
    /// # Errors
    ///
    /// As [`status`](Self::status), plus `ParseError::MissingField` on
    /// switches without power metering.
    pub async fn active_power(&self) -> Result<f64, Error> {
        required(self.status().await?.apower, "apower")
    }

    /// Reads the device temperature in degrees Celsius.
    ///
    /// # Errors
    ///
    /// As [`status`](Self::status), plus `ParseError::MissingField` if no
    /// temperature is reported.
    pub async fn temperature_c(&self) -> Result<f64, Error> {
        required(self.status().await?.temperature_c(), "temperature.tC")
    }
}

/// Handle to one `Input` component.
#[derive(Debug)]
pub struct InputComponent<'a, P: Rpc> {
    rpc: &'a P,
    id: u8,
}

impl<'a, P: Rpc> InputComponent<'a, P> {
    pub(crate) fn new(rpc: &'a P, id: u8) -> Self {
        Self { rpc, id }
    }

    /// Returns the input instance.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// `Input.GetConfig`, undecoded.
    pub async fn config(&self) -> RpcResult {
        self.rpc.send(&InputMethod::GetConfig { id: self.id }).await
    }

    /// Reads the input state.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// response cannot be decoded.
    pub async fn status(&self) -> Result<InputStatus, Error> {
        self.rpc
            .send(&InputMethod::GetStatus { id: self.id })
            .await
            .parse()
    }
}
