// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP device builder.

use std::time::Duration;

use crate::capabilities::Capabilities;
use crate::device::Device;
use crate::error::Error;
use crate::method::ShellyMethod;
use crate::protocol::{HttpConfig, Rpc, RpcClient};
use crate::response::DeviceInfo;

/// Builder for creating HTTP-based devices.
///
/// This builder can be created in two ways:
/// - `Device::http("host")` - Simple host string
/// - `Device::http_config(HttpConfig::new("host").with_port(8080))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use shelly_rpc::Device;
///
/// # async fn example() -> shelly_rpc::Result<()> {
/// // Simple: with auto-detection
/// let device = Device::http("192.168.1.100")
///     .build()
///     .await?;
///
/// // Protected device
/// let device = Device::http("192.168.1.100")
///     .with_password("secret")
///     .build()
///     .await?;
///
/// // With manual capabilities (no network probe)
/// let device = Device::http("192.168.1.100")
///     .with_capabilities(shelly_rpc::Capabilities::plus_1pm())
///     .build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpDeviceBuilder {
    config: HttpConfig,
    capabilities: Option<Capabilities>,
    name: Option<String>,
}

impl HttpDeviceBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            capabilities: None,
            name: None,
        }
    }

    /// Sets the password for the default `admin` user.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.config = self.config.with_password(password);
        self
    }

    /// Sets both user name and password.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config = self.config.with_credentials(username, password);
        self
    }

    /// Sets the TCP port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the device name. Defaults to the host.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the device capabilities manually (skips auto-detection).
    ///
    /// Use this when you know the model and want to avoid the initial
    /// `Shelly.GetDeviceInfo` query.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Returns the currently set capabilities, if any.
    #[must_use]
    pub fn capabilities(&self) -> Option<&Capabilities> {
        self.capabilities.as_ref()
    }

    /// Builds the device with auto-detection of capabilities.
    ///
    /// Queries `Shelly.GetDeviceInfo` unless capabilities were set. Use
    /// [`build_without_probe`](Self::build_without_probe) to skip the
    /// network entirely.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The host is empty or the HTTP client cannot be created
    /// - The probe does not answer 200 (`Error::Rpc`)
    /// - The probe answer is not a device info object
    pub async fn build(self) -> Result<Device<RpcClient>, Error> {
        let client = self.config.clone().into_client()?;

        let capabilities = if let Some(caps) = self.capabilities {
            caps
        } else {
            let info: DeviceInfo = client.send(&ShellyMethod::GetDeviceInfo).await.parse()?;
            tracing::debug!(
                host = %self.config.host(),
                app = %info.app,
                generation = info.generation,
                "Probed device"
            );
            Capabilities::from_device_info(&info)
        };

        let name = self
            .name
            .unwrap_or_else(|| self.config.host().to_string());
        Ok(Device::new(client, capabilities, name))
    }

    /// Builds the device without probing for capabilities.
    ///
    /// If capabilities were not set, defaults to [`Capabilities::default()`].
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn build_without_probe(self) -> Result<Device<RpcClient>, Error> {
        let name = self
            .name
            .unwrap_or_else(|| self.config.host().to_string());
        let client = self.config.into_client()?;
        let capabilities = self.capabilities.unwrap_or_default();
        Ok(Device::new(client, capabilities, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    #[test]
    fn builder_new() {
        let builder = HttpDeviceBuilder::new(HttpConfig::new("192.168.1.100"));
        assert!(builder.capabilities().is_none());
        assert!(builder.name.is_none());
    }

    #[test]
    fn builder_keeps_config_when_adding_credentials() {
        let builder = HttpDeviceBuilder::new(HttpConfig::new("192.168.1.100"))
            .with_port(8080)
            .with_timeout(Duration::from_secs(3))
            .with_credentials("operator", "pw");
        assert_eq!(builder.config.port(), 8080);
        assert_eq!(builder.config.timeout(), Duration::from_secs(3));
        assert_eq!(builder.config.credentials().username(), "operator");
        assert_eq!(builder.config.credentials().password(), "pw");
    }

    #[test]
    fn builder_password_uses_admin() {
        let builder = HttpDeviceBuilder::new(HttpConfig::new("10.0.0.2")).with_password("pw");
        assert_eq!(builder.config.credentials().username(), "admin");
    }

    #[test]
    fn build_without_probe() {
        let device = HttpDeviceBuilder::new(HttpConfig::new("192.168.1.100"))
            .with_capabilities(Capabilities::plus_2pm_cover())
            .build_without_probe()
            .unwrap();
        assert!(device.capabilities().supports_cover(0));
        assert_eq!(device.name(), "192.168.1.100");
    }

    #[test]
    fn build_without_probe_defaults() {
        let device = HttpDeviceBuilder::new(HttpConfig::new("192.168.1.100"))
            .with_name("Hallway")
            .build_without_probe()
            .unwrap();
        assert_eq!(device.capabilities(), &Capabilities::gen2());
        assert_eq!(device.name(), "Hallway");
    }

    #[test]
    fn build_without_probe_rejects_empty_host() {
        let err = HttpDeviceBuilder::new(HttpConfig::new(""))
            .build_without_probe()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::InvalidAddress(_))
        ));
    }
}
