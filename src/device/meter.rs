// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature sensor and energy meter handles.

use crate::device::required;
use crate::error::Error;
use crate::method::{Em1Method, EmMethod, TemperatureMethod};
use crate::protocol::{Rpc, RpcResult};
use crate::response::{Em1Status, EmStatus, TemperatureStatus};

/// Handle to one `Temperature` component.
#[derive(Debug)]
pub struct TemperatureComponent<'a, P: Rpc> {
    rpc: &'a P,
    id: u8,
}

impl<'a, P: Rpc> TemperatureComponent<'a, P> {
    pub(crate) fn new(rpc: &'a P, id: u8) -> Self {
        Self { rpc, id }
    }

    /// `Temperature.GetConfig`, undecoded.
    pub async fn config(&self) -> RpcResult {
        self.rpc
            .send(&TemperatureMethod::GetConfig { id: self.id })
            .await
    }

    /// Reads the sensor.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// response cannot be decoded.
    pub async fn status(&self) -> Result<TemperatureStatus, Error> {
        self.rpc
            .send(&TemperatureMethod::GetStatus { id: self.id })
            .await
            .parse()
    }

    /// Reads the temperature in degrees Celsius.
    ///
    /// # Errors
    ///
    /// As [`status`](Self::status), plus `ParseError::MissingField` when the
    /// sensor has no reading.
    pub async fn temperature_c(&self) -> Result<f64, Error> {
        required(self.status().await?.celsius, "tC")
    }
}

/// Handle to one three-phase `EM` component.
#[derive(Debug)]
pub struct EmComponent<'a, P: Rpc> {
    rpc: &'a P,
    id: u8,
}

impl<'a, P: Rpc> EmComponent<'a, P> {
    pub(crate) fn new(rpc: &'a P, id: u8) -> Self {
        Self { rpc, id }
    }

    /// `EM.GetConfig`, undecoded.
    pub async fn config(&self) -> RpcResult {
        self.rpc.send(&EmMethod::GetConfig { id: self.id }).await
    }

    /// Reads all phases.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// response cannot be decoded.
    pub async fn status(&self) -> Result<EmStatus, Error> {
        self.rpc
            .send(&EmMethod::GetStatus { id: self.id })
            .await
            .parse()
    }

    /// Reads the active power summed over all phases, in watts.
    ///
    /// # Errors
    ///
    /// As [`status`](Self::status), plus `ParseError::MissingField` if the
    /// total is not reported.
    pub async fn total_active_power(&self) -> Result<f64, Error> {
        required(self.status().await?.total_act_power, "total_act_power")
    }
}

/// Handle to one single-phase `EM1` component.
#[derive(Debug)]
pub struct Em1Component<'a, P: Rpc> {
    rpc: &'a P,
    id: u8,
}

impl<'a, P: Rpc> Em1Component<'a, P> {
    pub(crate) fn new(rpc: &'a P, id: u8) -> Self {
        Self { rpc, id }
    }

    /// `EM1.GetConfig`, undecoded.
    pub async fn config(&self) -> RpcResult {
        self.rpc.send(&Em1Method::GetConfig { id: self.id }).await
    }

    /// Reads the meter.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// response cannot be decoded.
    pub async fn status(&self) -> Result<Em1Status, Error> {
        self.rpc
            .send(&Em1Method::GetStatus { id: self.id })
            .await
            .parse()
    }

    /// Reads the active power in watts.
    ///
    /// # Errors
    ///
    /// As [`status`](Self::status), plus `ParseError::MissingField` if no
    /// power is reported.
    pub async fn active_power(&self) -> Result<f64, Error> {
        required(self.status().await?.act_power, "act_power")
    }
}
