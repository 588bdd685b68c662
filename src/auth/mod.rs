// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP Digest authentication for Shelly Gen2+ devices.
//!
//! Shelly devices protect their RPC endpoints with Digest authentication
//! using SHA-256 and `qop=auth`. Generic HTTP client auth handlers do not
//! speak this flavor, so the exchange is driven manually:
//!
//! 1. [`Challenge::parse`] extracts `realm`, `nonce`, `qop` and `algorithm`
//!    from the `WWW-Authenticate` header of a 401 response.
//! 2. [`digest::authorize`] computes the response hash and assembles the
//!    `Authorization` header value.
//!
//! Nothing in this module performs I/O.
//!
//! # Examples
//!
//! ```
//! use shelly_rpc::auth::{digest, Challenge, Credentials};
//!
//! let challenge = Challenge::parse(
//!     r#"Digest qop="auth", realm="shellyplus1pm-a8032ab12345", nonce="60dc59c6", algorithm=SHA-256"#,
//! );
//! let credentials = Credentials::new("secret1");
//!
//! let header = digest::authorize_with_cnonce(
//!     &credentials,
//!     &challenge,
//!     "GET",
//!     "/rpc/Shelly.GetStatus",
//!     "42",
//! )
//! .unwrap();
//!
//! assert!(header.to_string().starts_with(r#"Digest username="admin", realm="shellyplus1pm-a8032ab12345""#));
//! assert_eq!(header.response().len(), 64);
//! ```

mod challenge;
pub mod digest;

use std::fmt;

pub use challenge::{Algorithm, Challenge};
pub use digest::AuthorizationHeader;

/// Credentials used to answer a Digest challenge.
///
/// Shelly devices use the fixed account name `admin`; only the password is
/// configurable on the device. An empty password means no credentials are
/// configured, and challenges are then passed back to the caller unanswered.
///
/// The password is never sent over the wire and is redacted from `Debug`
/// output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// The account name used by Shelly devices.
    pub const DEFAULT_USERNAME: &'static str = "admin";

    /// Creates credentials for the default `admin` account.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            username: Self::DEFAULT_USERNAME.to_string(),
            password: password.into(),
        }
    }

    /// Creates credentials with an explicit account name.
    #[must_use]
    pub fn with_username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the account name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns `true` if a non-empty password is configured.
    #[must_use]
    pub fn has_secret(&self) -> bool {
        !self.password.is_empty()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Extracts the text between `marker` and the next `delimiter`.
///
/// Returns an empty string if `marker` does not occur in `text`. If the
/// delimiter never follows the marker, everything after the marker is
/// returned.
///
/// # Examples
///
/// ```
/// use shelly_rpc::auth::extract_param;
///
/// let header = r#"Digest realm="shelly", nonce="abc123""#;
/// assert_eq!(extract_param(header, "nonce=\"", '"'), "abc123");
/// assert_eq!(extract_param(header, "opaque=\"", '"'), "");
/// ```
#[must_use]
pub fn extract_param<'a>(text: &'a str, marker: &str, delimiter: char) -> &'a str {
    let Some(begin) = text.find(marker) else {
        return "";
    };
    let rest = &text[begin + marker.len()..];
    rest.find(delimiter).map_or(rest, |end| &rest[..end])
}
