// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `shelly_rpc` library.
//!
//! The RPC transport itself never fails: [`RpcClient::call`](crate::protocol::RpcClient::call)
//! folds every failure into an [`RpcResult`](crate::protocol::RpcResult). The
//! errors below belong to the layers around it: client construction, digest
//! computation, value validation, and typed decoding of device responses.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while setting up the transport.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while computing a digest response.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Error occurred during device operations.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The device answered an RPC call with a non-200 outcome.
    ///
    /// Negative codes are transport failures, see
    /// [`RpcResult`](crate::protocol::RpcResult).
    #[error("RPC call failed with status {status}")]
    Rpc {
        /// HTTP status code or negative transport failure code.
        status: i32,
    },
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },
}

/// Errors raised while building the HTTP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The underlying HTTP client could not be created.
    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors raised by the digest engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The challenge asked for a hash algorithm other than SHA-256.
    #[error("unsupported digest algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    /// The challenge uses a scheme other than `Digest`.
    #[error("unsupported authentication scheme: {0:?}")]
    UnsupportedScheme(String),
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors related to device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Device does not support the requested capability.
    #[error("device does not support {capability}")]
    UnsupportedCapability {
        /// The capability that is not supported.
        capability: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
