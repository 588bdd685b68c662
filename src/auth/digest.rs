// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Digest response computation (SHA-256, `qop=auth`).
//!
//! ```text
//! HA1      = SHA256(username ":" realm ":" password)
//! HA2      = SHA256(method ":" path)
//! response = SHA256(HA1 ":" nonce ":" nc ":" cnonce ":" qop ":" HA2)
//! ```
//!
//! Shelly documents `dummy_method:dummy_uri` as an accepted HA2 input, but
//! devices reject it. HA2 is always computed over the real request method
//! and path.

use std::fmt;

use rand::Rng;

use crate::auth::{Algorithm, Challenge, Credentials};
use crate::error::AuthError;

/// Nonce count sent with every response. Each challenge is answered once.
pub const NONCE_COUNT: &str = "1";

const CNONCE_UPPER_BOUND: u32 = 556_822_323;

/// Generates a client nonce as a decimal string.
///
/// Uses the thread-local generator, seeded once from the OS.
#[must_use]
pub fn generate_cnonce() -> String {
    rand::thread_rng().gen_range(0..CNONCE_UPPER_BOUND).to_string()
}

/// Computes the Digest `response` value as 64 lowercase hex characters.
///
/// # Errors
///
/// Returns `AuthError::UnsupportedAlgorithm` if the challenge does not ask
/// for SHA-256.
pub fn compute_response(
    credentials: &Credentials,
    challenge: &Challenge,
    method: &str,
    path: &str,
    nonce_count: &str,
    cnonce: &str,
) -> Result<String, AuthError> {
    let algorithm = challenge.algorithm()?;

    let ha1 = algorithm.hash_hex(&format!(
        "{}:{}:{}",
        credentials.username(),
        challenge.realm,
        credentials.password()
    ));
    let ha2 = algorithm.hash_hex(&format!("{method}:{path}"));

    Ok(algorithm.hash_hex(&format!(
        "{ha1}:{}:{nonce_count}:{cnonce}:{}:{ha2}",
        challenge.nonce, challenge.qop
    )))
}

/// Answers `challenge` with a freshly generated client nonce.
///
/// # Errors
///
/// Returns `AuthError` if the challenge is not a SHA-256 Digest challenge.
pub fn authorize(
    credentials: &Credentials,
    challenge: &Challenge,
    method: &str,
    path: &str,
) -> Result<AuthorizationHeader, AuthError> {
    authorize_with_cnonce(credentials, challenge, method, path, &generate_cnonce())
}

/// Answers `challenge` with a caller-chosen client nonce.
///
/// # Errors
///
/// Returns `AuthError::UnsupportedScheme` if the challenge is not a Digest
/// challenge, or `AuthError::UnsupportedAlgorithm` if it is not SHA-256.
pub fn authorize_with_cnonce(
    credentials: &Credentials,
    challenge: &Challenge,
    method: &str,
    path: &str,
    cnonce: &str,
) -> Result<AuthorizationHeader, AuthError> {
    if !challenge.is_digest() {
        return Err(AuthError::UnsupportedScheme(challenge.scheme.clone()));
    }
    let algorithm = challenge.algorithm()?;
    let response = compute_response(credentials, challenge, method, path, NONCE_COUNT, cnonce)?;

    Ok(AuthorizationHeader {
        username: credentials.username().to_string(),
        realm: challenge.realm.clone(),
        nonce: challenge.nonce.clone(),
        algorithm,
        response,
        qop: challenge.qop.clone(),
        nonce_count: NONCE_COUNT.to_string(),
        cnonce: cnonce.to_string(),
    })
}

/// An assembled `Authorization` header value.
///
/// Formats as:
///
/// ```text
/// Digest username="admin", realm="…", nonce="…", algorithm=SHA-256, response="…", qop=auth, nc=1, cnonce="…"
/// ```
///
/// The `uri` directive is left out; Shelly devices do not require it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationHeader {
    username: String,
    realm: String,
    nonce: String,
    algorithm: Algorithm,
    response: String,
    qop: String,
    nonce_count: String,
    cnonce: String,
}

impl AuthorizationHeader {
    /// Returns the computed response hash.
    #[must_use]
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Returns the client nonce used for this response.
    #[must_use]
    pub fn cnonce(&self) -> &str {
        &self.cnonce
    }
}

impl fmt::Display for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Digest username=\"{}\", realm=\"{}\", nonce=\"{}\", algorithm={}, response=\"{}\", qop={}, nc={}, cnonce=\"{}\"",
            self.username,
            self.realm,
            self.nonce,
            self.algorithm,
            self.response,
            self.qop,
            self.nonce_count,
            self.cnonce
        )
    }
}
