// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction for Shelly devices.
//!
//! A [`Device`] owns one RPC transport and a [`Capabilities`] set. Each
//! component is reached through a short-lived handle that borrows the
//! transport:
//!
//! ```no_run
//! use shelly_rpc::Device;
//!
//! # async fn example() -> shelly_rpc::Result<()> {
//! let device = Device::http("192.168.1.100")
//!     .with_password("secret")
//!     .build()
//!     .await?;
//!
//! device.switch(0)?.set(true).await?;
//! println!("{} W", device.switch(0)?.active_power().await?);
//! println!("{} dBm", device.wifi()?.rssi().await?);
//! # Ok(())
//! # }
//! ```
//!
//! Asking for a component the device does not have fails with
//! [`DeviceError::UnsupportedCapability`] without any network traffic.
//! Typed accessors turn non-200 outcomes into [`Error::Rpc`]; the raw
//! [`RpcResult`] of any call stays available through [`Device::call`] and
//! [`Device::send`].

mod cover;
mod http_builder;
mod meter;
mod switch;
mod wifi;

pub use cover::CoverComponent;
pub use http_builder::HttpDeviceBuilder;
pub use meter::{Em1Component, EmComponent, TemperatureComponent};
pub use switch::{InputComponent, SwitchComponent};
pub use wifi::WifiComponent;

use std::sync::Arc;

use crate::capabilities::Capabilities;
use crate::error::{DeviceError, Error, ParseError};
use crate::method::{RpcMethod, ShellyMethod};
use crate::protocol::{HttpConfig, Rpc, RpcClient, RpcResult};
use crate::response::DeviceInfo;

/// A Shelly Gen2+ device.
///
/// The type parameter `P` is the RPC transport, [`RpcClient`] for HTTP
/// devices. Cloning a device shares the transport.
///
/// # Creating a Device
///
/// ```no_run
/// use shelly_rpc::{Capabilities, Device};
///
/// # async fn example() -> shelly_rpc::Result<()> {
/// // Detect components via Shelly.GetDeviceInfo
/// let device = Device::http("192.168.1.100").build().await?;
///
/// // Known model, no probe
/// let blinds = Device::http("192.168.1.101")
///     .with_password("secret")
///     .with_name("Living room blinds")
///     .with_capabilities(Capabilities::plus_2pm_cover())
///     .build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Device<P: Rpc> {
    rpc: Arc<P>,
    capabilities: Capabilities,
    name: String,
}

impl<P: Rpc> Clone for Device<P> {
    fn clone(&self) -> Self {
        Self {
            rpc: Arc::clone(&self.rpc),
            capabilities: self.capabilities.clone(),
            name: self.name.clone(),
        }
    }
}

impl Device<RpcClient> {
    /// Starts building an HTTP device for the given host.
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpDeviceBuilder {
        HttpDeviceBuilder::new(HttpConfig::new(host))
    }

    /// Starts building an HTTP device from a full configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpDeviceBuilder {
        HttpDeviceBuilder::new(config)
    }
}

impl<P: Rpc> Device<P> {
    /// Creates a device over any RPC transport.
    pub fn new(rpc: P, capabilities: Capabilities, name: impl Into<String>) -> Self {
        Self {
            rpc: Arc::new(rpc),
            capabilities,
            name: name.into(),
        }
    }

    /// Returns the device name.
    ///
    /// Defaults to the host the device was created for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the device.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the device capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn rpc(&self) -> &P {
        &self.rpc
    }

    /// Calls a method given as `Name[?query]`.
    pub async fn call(&self, method: &str) -> RpcResult {
        self.rpc.call(method).await
    }

    /// Calls a typed RPC method.
    pub async fn send<M: RpcMethod + Sync>(&self, method: &M) -> RpcResult {
        self.rpc.send(method).await
    }

    // ========== Shelly service ==========

    /// `Shelly.GetStatus`: status of every component.
    pub async fn get_status(&self) -> RpcResult {
        self.send(&ShellyMethod::GetStatus).await
    }

    /// `Shelly.GetConfig`: configuration of every component.
    pub async fn get_config(&self) -> RpcResult {
        self.send(&ShellyMethod::GetConfig).await
    }

    /// `Shelly.ListMethods`.
    pub async fn list_methods(&self) -> RpcResult {
        self.send(&ShellyMethod::ListMethods).await
    }

    /// `Shelly.CheckForUpdate`.
    pub async fn check_for_update(&self) -> RpcResult {
        self.send(&ShellyMethod::CheckForUpdate).await
    }

    /// `Shelly.GetComponents`.
    pub async fn get_components(&self) -> RpcResult {
        self.send(&ShellyMethod::GetComponents).await
    }

    /// `Shelly.GetDeviceInfo`, decoded.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` on a non-200 outcome, or `Error::Parse` if the
    /// body is not a device info object.
    pub async fn device_info(&self) -> Result<DeviceInfo, Error> {
        self.send(&ShellyMethod::GetDeviceInfo).await.parse()
    }

    // ========== Components ==========

    /// Returns the WiFi component.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedCapability` if the device has no WiFi.
    pub fn wifi(&self) -> Result<WifiComponent<'_, P>, Error> {
        if !self.capabilities.supports_wifi() {
            return Err(unsupported("WiFi"));
        }
        Ok(WifiComponent::new(self.rpc()))
    }

    /// Returns input `id`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedCapability` if the input does not exist.
    pub fn input(&self, id: u8) -> Result<InputComponent<'_, P>, Error> {
        if !self.capabilities.supports_input(id) {
            return Err(unsupported(format!("input {id}")));
        }
        Ok(InputComponent::new(self.rpc(), id))
    }

    /// Returns switch `id`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedCapability` if the switch does not exist.
    pub fn switch(&self, id: u8) -> Result<SwitchComponent<'_, P>, Error> {
        if !self.capabilities.supports_switch(id) {
            return Err(unsupported(format!("switch {id}")));
        }
        Ok(SwitchComponent::new(self.rpc(), id))
    }

    /// Returns cover `id`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedCapability` if the cover does not exist.
    pub fn cover(&self, id: u8) -> Result<CoverComponent<'_, P>, Error> {
        if !self.capabilities.supports_cover(id) {
            return Err(unsupported(format!("cover {id}")));
        }
        Ok(CoverComponent::new(self.rpc(), id))
    }

    /// Returns temperature sensor `id`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedCapability` if the device has no
    /// temperature sensors.
    pub fn temperature(&self, id: u8) -> Result<TemperatureComponent<'_, P>, Error> {
        if !self.capabilities.supports_temperature() {
            return Err(unsupported("temperature sensors"));
        }
        Ok(TemperatureComponent::new(self.rpc(), id))
    }

    /// Returns three-phase meter `id`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedCapability` if the device has no
    /// three-phase meter.
    pub fn em(&self, id: u8) -> Result<EmComponent<'_, P>, Error> {
        if !self.capabilities.supports_em() {
            return Err(unsupported("three-phase energy metering"));
        }
        Ok(EmComponent::new(self.rpc(), id))
    }

    /// Returns single-phase meter `id`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedCapability` if the meter does not exist.
    pub fn em1(&self, id: u8) -> Result<Em1Component<'_, P>, Error> {
        if !self.capabilities.supports_em1(id) {
            return Err(unsupported(format!("single-phase meter {id}")));
        }
        Ok(Em1Component::new(self.rpc(), id))
    }
}

fn unsupported(capability: impl Into<String>) -> Error {
    Error::Device(DeviceError::UnsupportedCapability {
        capability: capability.into(),
    })
}

/// Unwraps a reading the device did not report.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, Error> {
    value.ok_or_else(|| Error::Parse(ParseError::MissingField(field.to_string())))
}
