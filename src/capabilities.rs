// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capabilities detection and configuration.
//!
//! A Shelly device is a set of components (switches, inputs, covers,
//! meters) sharing one RPC endpoint. [`Capabilities`] records which
//! components a device has, so the device API can refuse calls to
//! components that do not exist before touching the network.
//!
//! Capabilities can be detected from `Shelly.GetDeviceInfo` or picked from
//! the presets for known models.

use crate::response::DeviceInfo;

/// Components present on a Shelly device.
///
/// # Examples
///
/// ```
/// use shelly_rpc::Capabilities;
///
/// let caps = Capabilities::plus_2pm_cover();
/// assert!(caps.supports_cover(0));
/// assert!(!caps.supports_switch(0));
/// assert!(caps.supports_input(1));
///
/// let plug = Capabilities::plug_plus_s();
/// assert_eq!(plug.switches, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// WiFi station component.
    pub wifi: bool,

    /// Number of `Input` components.
    pub inputs: u8,

    /// Number of `Switch` components.
    pub switches: u8,

    /// Number of `Cover` components.
    pub covers: u8,

    /// `Temperature` component.
    pub temperature: bool,

    /// Three-phase `EM` component.
    pub em: bool,

    /// Number of single-phase `EM1` components.
    pub em1: u8,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::gen2()
    }
}

impl Capabilities {
    /// Any Gen2+ device: system calls and WiFi only.
    #[must_use]
    pub const fn gen2() -> Self {
        Self {
            wifi: true,
            inputs: 0,
            switches: 0,
            covers: 0,
            temperature: false,
            em: false,
            em1: 0,
        }
    }

    /// Shelly Plus 1PM: one metered switch with one input.
    #[must_use]
    pub const fn plus_1pm() -> Self {
        Self {
            inputs: 1,
            switches: 1,
            ..Self::gen2()
        }
    }

    /// Shelly Plus 2PM in cover profile: one cover, two inputs.
    #[must_use]
    pub const fn plus_2pm_cover() -> Self {
        Self {
            inputs: 2,
            covers: 1,
            ..Self::gen2()
        }
    }

    /// Shelly Plus 2PM in switch profile: two switches, two inputs.
    #[must_use]
    pub const fn plus_2pm_switch() -> Self {
        Self {
            inputs: 2,
            switches: 2,
            ..Self::gen2()
        }
    }

    /// Shelly Plus Plug S: one metered switch.
    #[must_use]
    pub const fn plug_plus_s() -> Self {
        Self {
            switches: 1,
            ..Self::gen2()
        }
    }

    /// Shelly Pro 3EM in triphase profile.
    #[must_use]
    pub const fn pro_3em_triphase() -> Self {
        Self {
            temperature: true,
            em: true,
            ..Self::gen2()
        }
    }

    /// Shelly Pro 3EM in monophase profile: three independent meters.
    #[must_use]
    pub const fn pro_3em_monophase() -> Self {
        Self {
            temperature: true,
            em: true,
            em1: 3,
            ..Self::gen2()
        }
    }

    /// Detects capabilities from a `Shelly.GetDeviceInfo` response.
    ///
    /// Unknown models fall back to [`Capabilities::gen2`].
    #[must_use]
    pub fn from_device_info(info: &DeviceInfo) -> Self {
        let profile = info.profile.as_deref().unwrap_or_default();
        match info.app.to_ascii_lowercase().as_str() {
            "plus1pm" | "plus1" => Self::plus_1pm(),
            "plus2pm" if profile == "cover" => Self::plus_2pm_cover(),
            "plus2pm" => Self::plus_2pm_switch(),
            "plusplugs" => Self::plug_plus_s(),
            "pro3em" if profile == "monophase" => Self::pro_3em_monophase(),
            "pro3em" => Self::pro_3em_triphase(),
            _ => {
                tracing::debug!(app = %info.app, "Unknown device model, using Gen2 defaults");
                Self::gen2()
            }
        }
    }

    /// Returns whether the WiFi component is available.
    #[must_use]
    pub const fn supports_wifi(&self) -> bool {
        self.wifi
    }

    /// Returns whether input `id` exists.
    #[must_use]
    pub const fn supports_input(&self, id: u8) -> bool {
        id < self.inputs
    }

    /// Returns whether switch `id` exists.
    #[must_use]
    pub const fn supports_switch(&self, id: u8) -> bool {
        id < self.switches
    }

    /// Returns whether cover `id` exists.
    #[must_use]
    pub const fn supports_cover(&self, id: u8) -> bool {
        id < self.covers
    }

    /// Returns whether the device has temperature sensors.
    #[must_use]
    pub const fn supports_temperature(&self) -> bool {
        self.temperature
    }

    /// Returns whether the three-phase meter is available.
    #[must_use]
    pub const fn supports_em(&self) -> bool {
        self.em
    }

    /// Returns whether single-phase meter `id` exists.
    #[must_use]
    pub const fn supports_em1(&self, id: u8) -> bool {
        id < self.em1
    }

    /// Returns whether the device measures power.
    #[must_use]
    pub const fn has_energy_monitoring(&self) -> bool {
        self.em || self.em1 > 0 || self.switches > 0 || self.covers > 0
    }
}

/// Builder for creating custom capabilities.
///
/// Starts from [`Capabilities::gen2`].
#[derive(Debug, Default)]
pub struct CapabilitiesBuilder {
    inner: Capabilities,
}

impl CapabilitiesBuilder {
    /// Creates a new builder with Gen2 defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of inputs.
    #[must_use]
    pub fn inputs(mut self, count: u8) -> Self {
        self.inner.inputs = count;
        self
    }

    /// Sets the number of switches.
    #[must_use]
    pub fn switches(mut self, count: u8) -> Self {
        self.inner.switches = count;
        self
    }

    /// Sets the number of covers.
    #[must_use]
    pub fn covers(mut self, count: u8) -> Self {
        self.inner.covers = count;
        self
    }

    /// Enables temperature sensors.
    #[must_use]
    pub fn with_temperature(mut self) -> Self {
        self.inner.temperature = true;
        self
    }

    /// Enables the three-phase meter.
    #[must_use]
    pub fn with_em(mut self) -> Self {
        self.inner.em = true;
        self
    }

    /// Sets the number of single-phase meters.
    #[must_use]
    pub fn em1(mut self, count: u8) -> Self {
        self.inner.em1 = count;
        self
    }

    /// Disables the WiFi component (e.g. Ethernet-only setups).
    #[must_use]
    pub fn without_wifi(mut self) -> Self {
        self.inner.wifi = false;
        self
    }

    /// Builds the capabilities.
    #[must_use]
    pub fn build(self) -> Capabilities {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(app: &str, profile: Option<&str>) -> DeviceInfo {
        DeviceInfo {
            app: app.to_string(),
            profile: profile.map(str::to_string),
            ..DeviceInfo::default()
        }
    }

    #[test]
    fn default_is_gen2() {
        let caps = Capabilities::default();
        assert!(caps.supports_wifi());
        assert!(!caps.supports_switch(0));
        assert!(!caps.has_energy_monitoring());
    }

    #[test]
    fn plus_1pm_preset() {
        let caps = Capabilities::plus_1pm();
        assert!(caps.supports_switch(0));
        assert!(!caps.supports_switch(1));
        assert!(caps.supports_input(0));
        assert!(caps.has_energy_monitoring());
    }

    #[test]
    fn pro_3em_presets() {
        let tri = Capabilities::pro_3em_triphase();
        assert!(tri.supports_em());
        assert!(tri.supports_temperature());
        assert!(!tri.supports_em1(0));

        let mono = Capabilities::pro_3em_monophase();
        assert!(mono.supports_em1(2));
        assert!(!mono.supports_em1(3));
    }

    #[test]
    fn detect_plus_2pm_profiles() {
        assert_eq!(
            Capabilities::from_device_info(&info("Plus2PM", Some("cover"))),
            Capabilities::plus_2pm_cover()
        );
        assert_eq!(
            Capabilities::from_device_info(&info("Plus2PM", Some("switch"))),
            Capabilities::plus_2pm_switch()
        );
    }

    #[test]
    fn detect_pro_3em_profiles() {
        assert_eq!(
            Capabilities::from_device_info(&info("Pro3EM", Some("monophase"))),
            Capabilities::pro_3em_monophase()
        );
        assert_eq!(
            Capabilities::from_device_info(&info("Pro3EM", Some("triphase"))),
            Capabilities::pro_3em_triphase()
        );
    }

    #[test]
    fn detect_plugs_and_1pm() {
        assert_eq!(
            Capabilities::from_device_info(&info("PlusPlugS", None)),
            Capabilities::plug_plus_s()
        );
        assert_eq!(
            Capabilities::from_device_info(&info("Plus1PM", None)),
            Capabilities::plus_1pm()
        );
    }

    #[test]
    fn detect_unknown_model() {
        assert_eq!(
            Capabilities::from_device_info(&info("PlusHT", None)),
            Capabilities::gen2()
        );
    }

    #[test]
    fn builder() {
        let caps = CapabilitiesBuilder::new()
            .switches(4)
            .inputs(4)
            .with_temperature()
            .without_wifi()
            .build();
        assert!(caps.supports_switch(3));
        assert!(caps.supports_temperature());
        assert!(!caps.supports_wifi());
        assert!(!caps.supports_em());
    }
}
