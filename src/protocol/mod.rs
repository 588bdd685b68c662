// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RPC transport for Shelly Gen2+ devices.
//!
//! Shelly devices expose their API as `GET /rpc/<Method>[?<query>]`,
//! answering with a JSON body. [`RpcClient`] performs one such call,
//! answering a Digest challenge at most once.
//!
//! Every call produces an [`RpcResult`]; transport failures and non-200
//! statuses are folded into a synthetic `{"httpResponse": <code>}` payload
//! instead of being raised, so polling loops never have to unwind.

mod http;

pub use http::{HttpConfig, RpcClient};

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{Error, ParseError};
use crate::method::RpcMethod;

/// Outcome of a single RPC call.
///
/// Either the raw body of a 200 response, or the status code of anything
/// else. Negative codes stand for transport failures:
///
/// | Code | Meaning |
/// |------|---------|
/// | [`CONNECTION_REFUSED`](Self::CONNECTION_REFUSED) (-1) | Could not connect or send the request |
/// | [`CONNECTION_LOST`](Self::CONNECTION_LOST) (-5) | Connection dropped while reading the body |
/// | [`READ_TIMEOUT`](Self::READ_TIMEOUT) (-11) | No answer within the configured timeout |
///
/// The text form ([`Display`](fmt::Display)) is the body itself, or
/// `{"httpResponse": <code>}`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::protocol::RpcResult;
///
/// let ok = RpcResult::Body(r#"{"id":0,"output":true}"#.to_string());
/// assert!(ok.is_success());
/// assert_eq!(ok.status(), 200);
///
/// let denied = RpcResult::Status(401);
/// assert_eq!(denied.to_string(), r#"{"httpResponse": 401}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcResult {
    /// Body of a 200 response.
    Body(String),
    /// Any other outcome, as an HTTP status or negative transport code.
    Status(i32),
}

impl RpcResult {
    /// The device could not be reached or the request could not be sent.
    pub const CONNECTION_REFUSED: i32 = -1;
    /// The connection was lost while reading the response body.
    pub const CONNECTION_LOST: i32 = -5;
    /// The device did not answer in time.
    pub const READ_TIMEOUT: i32 = -11;

    /// Returns the HTTP status, 200 for a body.
    #[must_use]
    pub fn status(&self) -> i32 {
        match self {
            Self::Body(_) => 200,
            Self::Status(code) => *code,
        }
    }

    /// Returns `true` if the device answered with 200.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Body(_))
    }

    /// Returns the response body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Body(body) => Some(body),
            Self::Status(_) => None,
        }
    }

    /// Converts the result into its text form.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Body(body) => body,
            Self::Status(_) => self.to_string(),
        }
    }

    /// Returns the body, or `Error::Rpc` carrying the status.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` if the call did not succeed.
    pub fn into_body(self) -> Result<String, Error> {
        match self {
            Self::Body(body) => Ok(body),
            Self::Status(status) => Err(Error::Rpc { status }),
        }
    }

    /// Parses the body as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rpc` if the call did not succeed, or `Error::Parse` if
    /// the body does not decode into `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, Error> {
        match self {
            Self::Body(body) => serde_json::from_str(body)
                .map_err(ParseError::Json)
                .map_err(Error::Parse),
            Self::Status(status) => Err(Error::Rpc { status: *status }),
        }
    }
}

impl fmt::Display for RpcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body(body) => f.write_str(body),
            Self::Status(code) => write!(f, "{{\"httpResponse\": {code}}}"),
        }
    }
}

/// Builds the request path for an RPC method, e.g. `/rpc/Switch.GetStatus?id=0`.
#[must_use]
pub fn rpc_path(method: &str) -> String {
    format!("/rpc/{}", method.trim_start_matches('/'))
}

/// A transport able to perform Shelly RPC calls.
#[allow(async_fn_in_trait)]
pub trait Rpc {
    /// Calls a method given as `Name[?query]` and returns its outcome.
    async fn call(&self, method: &str) -> RpcResult;

    /// Calls a typed RPC method.
    async fn send<M: RpcMethod + Sync>(&self, method: &M) -> RpcResult {
        self.call(&method.to_rpc_path()).await
    }
}
