// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WWW-Authenticate` challenge parsing.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::auth::extract_param;
use crate::error::AuthError;

/// Hash algorithms supported for Digest authentication.
///
/// Shelly Gen2+ devices only issue SHA-256 challenges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-256 (RFC 7616).
    Sha256,
}

impl Algorithm {
    /// Resolves the `algorithm` directive of a challenge.
    ///
    /// The token is cut at the first comma and stripped of whitespace and
    /// quotes before comparison, which is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UnsupportedAlgorithm` for anything but SHA-256,
    /// including an empty token.
    pub fn from_token(raw: &str) -> Result<Self, AuthError> {
        let token = raw
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('"');
        if token.eq_ignore_ascii_case("SHA-256") {
            Ok(Self::Sha256)
        } else {
            Err(AuthError::UnsupportedAlgorithm(token.to_string()))
        }
    }

    /// Hashes `input` and renders it as lowercase hex.
    #[must_use]
    pub fn hash_hex(self, input: &str) -> String {
        match self {
            Self::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => f.write_str("SHA-256"),
        }
    }
}

/// A Digest challenge taken from a `WWW-Authenticate` response header.
///
/// Only the directives Shelly devices need are extracted. Missing
/// directives become empty strings; parsing never fails.
///
/// # Examples
///
/// ```
/// use shelly_rpc::auth::{Algorithm, Challenge};
///
/// let challenge = Challenge::parse(
///     r#"Digest qop="auth", realm="shelly", nonce="abc123", algorithm=SHA-256"#,
/// );
/// assert_eq!(challenge.scheme, "Digest");
/// assert_eq!(challenge.realm, "shelly");
/// assert_eq!(challenge.nonce, "abc123");
/// assert_eq!(challenge.qop, "auth");
/// assert_eq!(challenge.algorithm().unwrap(), Algorithm::Sha256);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Challenge {
    /// Authentication scheme, the text before the first space.
    pub scheme: String,
    /// Authentication realm.
    pub realm: String,
    /// Server nonce.
    pub nonce: String,
    /// Quality of protection.
    pub qop: String,
    /// Raw algorithm text, from `algorithm=` to the end of the header.
    pub algorithm: String,
}

impl Challenge {
    /// Parses a `WWW-Authenticate` header value.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let header = header.trim();
        let scheme = header.split_once(' ').map_or(header, |(scheme, _)| scheme);
        let algorithm = header
            .find("algorithm=")
            .map_or("", |begin| &header[begin + "algorithm=".len()..]);

        Self {
            scheme: scheme.to_string(),
            realm: extract_param(header, "realm=\"", '"').to_string(),
            nonce: extract_param(header, "nonce=\"", '"').to_string(),
            qop: extract_param(header, "qop=\"", '"').to_string(),
            algorithm: algorithm.to_string(),
        }
    }

    /// Returns `true` if this is a Digest challenge.
    #[must_use]
    pub fn is_digest(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("Digest")
    }

    /// Resolves the hash algorithm requested by the challenge.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UnsupportedAlgorithm` if the algorithm is not SHA-256.
    pub fn algorithm(&self) -> Result<Algorithm, AuthError> {
        Algorithm::from_token(&self.algorithm)
    }
}
