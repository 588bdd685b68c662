// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `shelly_rpc` - A Rust library to call Shelly Gen2+ devices over HTTP RPC.
//!
//! Shelly Gen2+ devices expose every operation as `GET /rpc/<Method>` and,
//! when protected, answer with a SHA-256 Digest challenge. This library
//! performs the challenge/response itself and retries exactly once, so each
//! call costs at most two round trips.
//!
//! # Supported Features
//!
//! - **Raw RPC**: Call any method and get its body or status code
//! - **Digest authentication**: SHA-256, `qop=auth`, driven manually
//! - **Switches and inputs**: Set, toggle, power and temperature readings
//! - **Covers**: Open, close, stop, go to position
//! - **Energy meters**: Three-phase `EM` and single-phase `EM1`
//! - **System**: Device info, status, config, WiFi signal strength
//!
//! # Quick Start
//!
//! ## Raw RPC
//!
//! ```no_run
//! use shelly_rpc::RpcClient;
//!
//! #[tokio::main]
//! async fn main() -> shelly_rpc::Result<()> {
//!     let client = RpcClient::new("192.168.1.100")?.with_password("secret");
//!
//!     // Either the JSON body, or {"httpResponse": <code>}
//!     let result = client.call("Switch.GetStatus?id=0").await;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```
//!
//! ## Device with Auto-Detection
//!
//! ```no_run
//! use shelly_rpc::Device;
//!
//! #[tokio::main]
//! async fn main() -> shelly_rpc::Result<()> {
//!     // Probes Shelly.GetDeviceInfo to learn the components
//!     let device = Device::http("192.168.1.100")
//!         .with_password("secret")
//!         .build()
//!         .await?;
//!
//!     if device.capabilities().supports_switch(0) {
//!         device.switch(0)?.toggle().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Device with Manual Capabilities
//!
//! ```no_run
//! use shelly_rpc::{Capabilities, CoverPosition, Device};
//!
//! #[tokio::main]
//! async fn main() -> shelly_rpc::Result<()> {
//!     let device = Device::http("192.168.1.101")
//!         .with_capabilities(Capabilities::plus_2pm_cover())
//!         .build_without_probe()?;
//!
//!     device.cover(0)?.go_to_position(CoverPosition::new(40)?).await;
//!     Ok(())
//! }
//! ```

pub mod auth;
mod capabilities;
mod device;
pub mod error;
pub mod method;
pub mod protocol;
pub mod response;
pub mod types;

pub use auth::{Challenge, Credentials};
pub use capabilities::{Capabilities, CapabilitiesBuilder};
pub use device::{
    CoverComponent, Device, Em1Component, EmComponent, HttpDeviceBuilder, InputComponent,
    SwitchComponent, TemperatureComponent, WifiComponent,
};
pub use error::{AuthError, DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use method::RpcMethod;
pub use protocol::{HttpConfig, Rpc, RpcClient, RpcResult};
pub use types::CoverPosition;
