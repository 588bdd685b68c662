// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP RPC client with manually driven Digest authentication.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, WWW_AUTHENTICATE};
use reqwest::{Client, StatusCode, redirect};

use crate::auth::{Challenge, Credentials, digest};
use crate::error::ProtocolError;
use crate::protocol::{Rpc, RpcResult, rpc_path};

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for an HTTP connection to a Shelly device.
///
/// # Examples
///
/// ```
/// use shelly_rpc::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.100");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.100")
///     .with_port(8080)
///     .with_password("secret")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.100:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    credentials: Credentials,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default timeout for each HTTP round trip.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// `host` is normally an IP address or hostname. A full base URL such as
    /// `http://10.0.0.5:8080` is also accepted and used as-is, in which case
    /// port and HTTPS settings are ignored.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            credentials: Credentials::default(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the device password for the default `admin` account.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.credentials = Credentials::new(password);
        self
    }

    /// Sets both account name and password.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Credentials::with_username(username, password);
        self
    }

    /// Sets the timeout applied to each HTTP round trip.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an `RpcClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty, or
    /// `ProtocolError::Http` if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<RpcClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let base_url = self.base_url();

        // Idle connections are not kept: the device may not accept a second
        // request on the connection that carried the challenge.
        let client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .redirect(redirect::Policy::none())
            .http1_only()
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(RpcClient {
            base_url,
            client,
            credentials: self.credentials,
        })
    }
}

// ============================================================================
// RpcClient - One RPC call, at most one Digest retry
// ============================================================================

/// HTTP client for Shelly RPC calls.
///
/// A call is a `GET <base_url>/rpc/<method>`. If the device answers 401
/// with a `WWW-Authenticate` challenge and a password is configured, the
/// request is repeated exactly once with a SHA-256 Digest `Authorization`
/// header. The outcome of that second request is final.
///
/// # Examples
///
/// ```no_run
/// use shelly_rpc::protocol::RpcClient;
///
/// # async fn example() -> shelly_rpc::Result<()> {
/// let client = RpcClient::new("192.168.1.100")?.with_password("secret");
/// let status = client.call("Shelly.GetStatus").await;
/// println!("{status}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RpcClient {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

const UNAUTHORIZED: i32 = 401;

/// Status, challenge and body of one HTTP round trip.
///
/// Holds no connection: the response is consumed or dropped before an
/// `Exchange` is returned.
struct Exchange {
    status: i32,
    www_authenticate: Option<String>,
    body: Option<String>,
}

impl Exchange {
    fn failed(status: i32) -> Self {
        Self {
            status,
            www_authenticate: None,
            body: None,
        }
    }

    fn into_result(self) -> RpcResult {
        match self.body {
            Some(body) => RpcResult::Body(body),
            None => RpcResult::Status(self.status),
        }
    }
}

impl RpcClient {
    /// Creates a client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Sets the device password for the default `admin` account.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.credentials = Credentials::new(password);
        self
    }

    /// Sets authentication credentials.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Performs one RPC call.
    ///
    /// `method` is the part after `/rpc/`, e.g. `Switch.GetStatus?id=0`.
    /// Never fails: see [`RpcResult`] for how failures are reported.
    pub async fn call(&self, method: &str) -> RpcResult {
        let path = rpc_path(method);
        let url = format!("{}{path}", self.base_url);

        let mut first = self.exchange(&url, None).await;
        if first.status != UNAUTHORIZED {
            return first.into_result();
        }

        let Some(header) = first.www_authenticate.take() else {
            tracing::debug!(url = %url, "Unauthorized without challenge");
            return first.into_result();
        };

        if !self.credentials.has_secret() {
            tracing::debug!(url = %url, "Device requires authentication, no password configured");
            return first.into_result();
        }

        let challenge = Challenge::parse(&header);
        let authorization = match digest::authorize(&self.credentials, &challenge, "GET", &path) {
            Ok(authorization) => authorization,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Cannot answer authentication challenge");
                return first.into_result();
            }
        };

        tracing::debug!(url = %url, realm = %challenge.realm, "Retrying with digest authentication");

        let retry = self
            .exchange(&url, Some(&authorization.to_string()))
            .await;
        if retry.status == UNAUTHORIZED {
            tracing::warn!(url = %url, "Device rejected digest credentials");
        }
        retry.into_result()
    }

    /// Performs a single GET and releases the connection before returning.
    async fn exchange(&self, url: &str, authorization: Option<&str>) -> Exchange {
        tracing::debug!(url = %url, authenticated = authorization.is_some(), "Sending RPC request");

        let mut request = self.client.get(url);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "RPC request failed");
                return Exchange::failed(transport_status(&e));
            }
        };

        let status = response.status();
        let www_authenticate = read_challenge(response.headers(), url);

        if status != StatusCode::OK {
            tracing::debug!(url = %url, status = status.as_u16(), "RPC request not successful");
            return Exchange {
                status: i32::from(status.as_u16()),
                www_authenticate,
                body: None,
            };
        }

        match response.text().await {
            Ok(body) => {
                tracing::debug!(body = %body, "Received RPC response");
                Exchange {
                    status: i32::from(status.as_u16()),
                    www_authenticate,
                    body: Some(body),
                }
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to read RPC response body");
                Exchange::failed(transport_status(&e))
            }
        }
    }
}

impl Rpc for RpcClient {
    async fn call(&self, method: &str) -> RpcResult {
        RpcClient::call(self, method).await
    }
}

/// Returns the `WWW-Authenticate` value if present and readable as text.
fn read_challenge(headers: &HeaderMap, url: &str) -> Option<String> {
    let value = headers.get(WWW_AUTHENTICATE)?;
    match value.to_str() {
        Ok(text) => Some(text.to_owned()),
        Err(_) => {
            tracing::warn!(url = %url, "Unreadable WWW-Authenticate header, ignoring challenge");
            None
        }
    }
}

/// Maps a transport error onto a negative status code.
fn transport_status(error: &reqwest::Error) -> i32 {
    if error.is_timeout() {
        RpcResult::READ_TIMEOUT
    } else if error.is_body() || error.is_decode() {
        RpcResult::CONNECTION_LOST
    } else {
        RpcResult::CONNECTION_REFUSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.100");
        assert_eq!(config.host(), "192.168.1.100");
        assert_eq!(config.port(), 80);
        assert!(!config.use_https());
        assert!(!config.credentials().has_secret());
        assert_eq!(config.credentials().username(), "admin");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_with_https() {
        let config = HttpConfig::new("192.168.1.100").with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 443);
        assert_eq!(config.base_url(), "https://192.168.1.100");
    }

    #[test]
    fn http_config_with_https_custom_port() {
        let config = HttpConfig::new("192.168.1.100")
            .with_port(8443)
            .with_https();
        assert_eq!(config.port(), 8443);
        assert_eq!(config.base_url(), "https://192.168.1.100:8443");
    }

    #[test]
    fn http_config_base_url_custom_port() {
        let config = HttpConfig::new("192.168.1.100").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.100:8080");
    }

    #[test]
    fn http_config_accepts_full_url() {
        let config = HttpConfig::new("http://127.0.0.1:4321/").with_port(9999);
        assert_eq!(config.base_url(), "http://127.0.0.1:4321");
    }

    #[test]
    fn http_config_with_password() {
        let config = HttpConfig::new("192.168.1.100").with_password("secret");
        assert_eq!(config.credentials().username(), "admin");
        assert_eq!(config.credentials().password(), "secret");
    }

    #[test]
    fn http_config_with_credentials() {
        let config = HttpConfig::new("192.168.1.100").with_credentials("operator", "secret");
        assert_eq!(config.credentials().username(), "operator");
        assert!(config.credentials().has_secret());
    }

    #[test]
    fn http_config_empty_host_is_rejected() {
        let result = HttpConfig::new("  ").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn http_config_into_client() {
        let client = HttpConfig::new("192.168.1.100")
            .with_password("pass")
            .into_client()
            .unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.100");
        assert!(client.credentials().has_secret());
    }

    #[test]
    fn client_new_without_password() {
        let client = RpcClient::new("192.168.1.100").unwrap();
        assert!(!client.credentials().has_secret());
    }

    #[test]
    fn client_with_password() {
        let client = RpcClient::new("192.168.1.100")
            .unwrap()
            .with_password("pass");
        assert_eq!(client.credentials().password(), "pass");
    }

    #[test]
    fn exchange_into_result() {
        let ok = Exchange {
            status: 200,
            www_authenticate: None,
            body: Some("{}".to_string()),
        };
        assert_eq!(ok.into_result(), RpcResult::Body("{}".to_string()));
        assert_eq!(Exchange::failed(-11).into_result(), RpcResult::Status(-11));
    }

    #[test]
    fn read_challenge_text() {
        let mut headers = HeaderMap::new();
        assert!(read_challenge(&headers, "http://dev/rpc/X").is_none());

        headers.insert(
            WWW_AUTHENTICATE,
            HeaderValue::from_static(r#"Digest qop="auth", realm="r", nonce="n""#),
        );
        assert_eq!(
            read_challenge(&headers, "http://dev/rpc/X").as_deref(),
            Some(r#"Digest qop="auth", realm="r", nonce="n""#)
        );
    }

    #[test]
    fn read_challenge_rejects_opaque_bytes() {
        let mut headers = HeaderMap::new();
        headers.insert(
            WWW_AUTHENTICATE,
            HeaderValue::from_bytes(b"Digest realm=\"\xff\"").unwrap(),
        );
        assert!(read_challenge(&headers, "http://dev/rpc/X").is_none());
    }

    #[tokio::test]
    async fn unreachable_device_yields_transport_status() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HttpConfig::new("127.0.0.1")
            .with_port(port)
            .with_timeout(Duration::from_secs(2))
            .into_client()
            .unwrap();
        let result = client.call("Shelly.GetStatus").await;
        assert!(!result.is_success());
        assert!(result.status() < 0);
    }
}
