// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover component handle.

use crate::device::required;
use crate::error::Error;
use crate::method::CoverMethod;
use crate::protocol::{Rpc, RpcResult};
use crate::response::CoverStatus;
use crate::types::CoverPosition;

/// Handle to one `Cover` component.
///
/// Movement commands return the raw [`RpcResult`]: the device answers them
/// with `null` on success.
#[derive(Debug)]
pub struct CoverComponent<'a, P: Rpc> {
    rpc: &'a P,
    id: u8,
}

impl<'a, P: Rpc> CoverComponent<'a, P> {
    pub(crate) fn new(rpc: &'a P, id: u8) -> Self {
        Self { rpc, id }
    }

    /// Returns the cover instance.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Starts opening.
    pub async fn open(&self) -> RpcResult {
        self.rpc.send(&CoverMethod::Open { id: self.id }).await
    }

    /// Starts closing.
    pub async fn close(&self) -> RpcResult {
        self.rpc.send(&CoverMethod::Close { id: self.id }).await
    }

    /// Stops any movement.
    pub async fn stop(&self) -> RpcResult {
        self.rpc.send(&CoverMethod::Stop { id: self.id }).await
    }

    /// Moves to `pos`. The cover must be calibrated.
    pub async fn go_to_position(&self, pos: CoverPosition) -> RpcResult {
        self.rpc
            .send(&CoverMethod::GoToPosition { id: self.id, pos })
            .await
    }

    /// `Cover.GetConfig`, undecoded.
    pub async fn config(&self) -> RpcResult {
        self.rpc.send(&CoverMethod::GetConfig { id: self.id }).await
    }

    /// Reads movement state, position and metering values.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// response cannot be decoded.
    pub async fn status(&self) -> Result<CoverStatus, Error> {
        self.rpc
            .send(&CoverMethod::GetStatus { id: self.id })
            .await
            .parse()
    }

    /// Reads the motor's active power in watts.
    ///
    /// # Errors
    ///
    /// As [`status`](Self::status), plus `ParseError::MissingField` if no
    /// power is reported.
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

#[cfg(test)]
mod tests {
    use crate::Device;
    use crate::capabilities::Capabilities;
    use crate::device::testing::ScriptedRpc;
    use crate::types::CoverPosition;

    #[tokio::test]
    async fn movement_commands() {
        let rpc = ScriptedRpc::new()
            .respond("Cover.Open?id=0", "null")
            .respond("Cover.Close?id=0", "null")
            .respond("Cover.Stop?id=0", "null")
            .respond("Cover.GoToPosition?id=0&pos=30", "null");
        let device = Device::new(rpc, Capabilities::plus_2pm_cover(), "blinds");
        let cover = device.cover(0).unwrap();

        assert!(cover.open().await.is_success());
        assert!(cover.close().await.is_success());
        assert!(cover.stop().await.is_success());
        assert!(
            cover
                .go_to_position(CoverPosition::new(30).unwrap())
                .await
                .is_success()
        );
        assert_eq!(device.rpc().calls().len(), 4);
    }

    #[tokio::test]
    async fn readings_from_status() {
        let rpc = ScriptedRpc::new().respond(
            "Cover.GetStatus?id=0",
            r#"{"id":0,"source":"http","state":"opening","apower":85.2,"current_pos":40,"temperature":{"tC":41.0,"tF":105.8}}"#,
        );
        let device = Device::new(rpc, Capabilities::plus_2pm_cover(), "blinds");
        let cover = device.cover(0).unwrap();

        let status = cover.status().await.unwrap();
        assert!(status.is_moving());
        assert_eq!(status.current_pos, Some(40));
        assert!((cover.active_power().await.unwrap() - 85.2).abs() < f64::EPSILON);
        assert!((cover.temperature_c().await.unwrap() - 41.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn failed_command_keeps_status() {
        let rpc = ScriptedRpc::new().fail("Cover.Open?id=0", -1);
        let device = Device::new(rpc, Capabilities::plus_2pm_cover(), "blinds");
        let result = device.cover(0).unwrap().open().await;
        assert_eq!(result.to_string(), r#"{"httpResponse": -1}"#);
    }
}
