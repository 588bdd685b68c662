// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the RPC client using wiremock.
//!
//! The protected endpoints verify the digest the way a Shelly device does:
//! the response hash is recomputed from the known password, so a request
//! only matches if the client hashed the right method, path and challenge.

use std::time::Duration;

use sha2::{Digest, Sha256};
use shelly_rpc::auth::extract_param;
use shelly_rpc::protocol::{HttpConfig, RpcClient, RpcResult};
use shelly_rpc::{Capabilities, Device, Error};
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

const REALM: &str = "shellyplus1pm-a8032ab12345";
const NONCE: &str = "60dc59c6";
const PASSWORD: &str = "secret1";

fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

fn challenge_header() -> String {
    format!(r#"Digest qop="auth", realm="{REALM}", nonce="{NONCE}", algorithm=SHA-256"#)
}

fn unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).insert_header("WWW-Authenticate", challenge_header().as_str())
}

fn client(server: &MockServer, password: &str) -> RpcClient {
    HttpConfig::new(server.uri())
        .with_password(password)
        .into_client()
        .unwrap()
}

/// Accepts a request only if it carries a valid SHA-256 digest for `password`.
struct DigestAuthorized {
    password: &'static str,
}

impl Match for DigestAuthorized {
    fn matches(&self, request: &Request) -> bool {
        let Some(header) = request
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
        else {
            return false;
        };

        if !header.starts_with("Digest ") || header.contains("uri=") {
            return false;
        }

        let username = extract_param(header, "username=\"", '"');
        let realm = extract_param(header, "realm=\"", '"');
        let nonce = extract_param(header, "nonce=\"", '"');
        let cnonce = extract_param(header, "cnonce=\"", '"');
        let response = extract_param(header, "response=\"", '"');
        let nc = extract_param(header, "nc=", ',');
        let qop = extract_param(header, "qop=", ',');
        let algorithm = extract_param(header, "algorithm=", ',');

        if realm != REALM
            || nonce != NONCE
            || nc != "1"
            || qop != "auth"
            || algorithm != "SHA-256"
            || cnonce.is_empty()
            || !cnonce.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }

        let uri = match request.url.query() {
            Some(query) => format!("{}?{query}", request.url.path()),
            None => request.url.path().to_string(),
        };
        let ha1 = sha256_hex(&format!("{username}:{realm}:{}", self.password));
        let ha2 = sha256_hex(&format!("GET:{uri}"));
        let expected = sha256_hex(&format!("{ha1}:{nonce}:1:{cnonce}:auth:{ha2}"));

        username == "admin" && response == expected
    }
}

/// Mounts a protected endpoint: valid digests get `body`, anything else the
/// challenge. Returns nothing; expectations are checked when `server` drops.
async fn mount_protected(
    server: &MockServer,
    rpc_path: &str,
    body: &str,
    authorized_hits: u64,
    challenged_hits: u64,
) {
    Mock::given(method("GET"))
        .and(path(rpc_path))
        .and(DigestAuthorized { password: PASSWORD })
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .with_priority(1)
        .expect(authorized_hits)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(rpc_path))
        .respond_with(unauthorized())
        .expect(challenged_hits)
        .mount(server)
        .await;
}

// ============================================================================
// RpcClient Tests
// ============================================================================

mod rpc_client {
    use super::*;

    #[tokio::test]
    async fn open_device_single_request() {
        let server = MockServer::start().await;
        let body = r#"{"id":0,"source":"init","output":true}"#;

        Mock::given(method("GET"))
            .and(path("/rpc/Switch.GetStatus"))
            .and(query_param("id", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, "").call("Switch.GetStatus?id=0").await;
        assert_eq!(result, RpcResult::Body(body.to_string()));
        assert_eq!(result.to_string(), body);
    }

    #[tokio::test]
    async fn digest_retry_succeeds() {
        let server = MockServer::start().await;
        let body = r#"{"sys":{"available_updates":{}}}"#;
        mount_protected(&server, "/rpc/Shelly.GetStatus", body, 1, 1).await;

        let result = client(&server, PASSWORD).call("Shelly.GetStatus").await;
        assert_eq!(result.body(), Some(body));
    }

    #[tokio::test]
    async fn digest_covers_query_string() {
        let server = MockServer::start().await;
        mount_protected(&server, "/rpc/Switch.GetStatus", r#"{"id":1}"#, 1, 1).await;

        let result = client(&server, PASSWORD).call("Switch.GetStatus?id=1").await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn wrong_password_retries_once() {
        let server = MockServer::start().await;
        mount_protected(&server, "/rpc/Shelly.GetStatus", "{}", 0, 2).await;

        let result = client(&server, "wrong").call("Shelly.GetStatus").await;
        assert_eq!(result, RpcResult::Status(401));
        assert_eq!(result.to_string(), r#"{"httpResponse": 401}"#);
    }

    #[tokio::test]
    async fn no_password_does_not_retry() {
        let server = MockServer::start().await;
        mount_protected(&server, "/rpc/Shelly.GetStatus", "{}", 0, 1).await;

        let result = client(&server, "").call("Shelly.GetStatus").await;
        assert_eq!(result.status(), 401);
    }

    #[tokio::test]
    async fn unauthorized_without_challenge_does_not_retry() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rpc/Shelly.GetStatus"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, PASSWORD).call("Shelly.GetStatus").await;
        assert_eq!(result.status(), 401);
    }

    #[tokio::test]
    async fn basic_challenge_is_not_answered() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rpc/Shelly.GetStatus"))
            .respond_with(
                ResponseTemplate::new(401).insert_header("WWW-Authenticate", r#"Basic realm="x""#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, PASSWORD).call("Shelly.GetStatus").await;
        assert_eq!(result.status(), 401);
    }

    #[tokio::test]
    async fn md5_challenge_is_not_answered() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rpc/Shelly.GetStatus"))
            .respond_with(ResponseTemplate::new(401).insert_header(
                "WWW-Authenticate",
                r#"Digest qop="auth", realm="r", nonce="n", algorithm=MD5"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, PASSWORD).call("Shelly.GetStatus").await;
        assert_eq!(result.status(), 401);
    }

    #[tokio::test]
    async fn challenge_without_realm_or_nonce_still_retries() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rpc/Shelly.GetStatus"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(401))
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rpc/Shelly.GetStatus"))
            .respond_with(ResponseTemplate::new(401).insert_header(
                "WWW-Authenticate",
                r#"Digest qop="auth", algorithm=SHA-256"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, "x").call("Shelly.GetStatus").await;
        assert_eq!(result, RpcResult::Status(401));

        let requests = server.received_requests().await.unwrap();
        let authorization = requests[1]
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .unwrap();
        assert!(authorization.contains(r#"realm="", nonce="""#));
        assert!(authorization.contains("algorithm=SHA-256"));
    }

    #[tokio::test]
    async fn retry_outcome_is_final() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rpc/Cover.Open"))
            .and(DigestAuthorized { password: PASSWORD })
            .respond_with(ResponseTemplate::new(500).set_body_string("busy"))
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rpc/Cover.Open"))
            .respond_with(unauthorized())
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, PASSWORD).call("Cover.Open?id=0").await;
        assert_eq!(result, RpcResult::Status(500));
    }

    #[tokio::test]
    async fn non_200_body_is_discarded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rpc/Foo.Bar"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"code":404,"message":"No handler"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, PASSWORD).call("Foo.Bar").await;
        assert_eq!(result.to_string(), r#"{"httpResponse": 404}"#);
    }

    #[tokio::test]
    async fn every_call_authenticates_from_scratch() {
        let server = MockServer::start().await;
        mount_protected(&server, "/rpc/Shelly.GetStatus", "{}", 2, 2).await;

        let client = client(&server, PASSWORD);
        assert!(client.call("Shelly.GetStatus").await.is_success());
        assert!(client.call("Shelly.GetStatus").await.is_success());
    }

    #[tokio::test]
    async fn slow_device_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rpc/Shelly.GetStatus"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = HttpConfig::new(server.uri())
            .with_timeout(Duration::from_millis(200))
            .into_client()
            .unwrap();

        let result = client.call("Shelly.GetStatus").await;
        assert_eq!(result.status(), RpcResult::READ_TIMEOUT);
        assert_eq!(result.to_string(), r#"{"httpResponse": -11}"#);
    }
}

// ============================================================================
// Device Tests
// ============================================================================

mod device {
    use super::*;

    const DEVICE_INFO: &str = r#"{"name":"Garage","id":"shellyplus1pm-a8032ab12345","mac":"A8032AB12345","model":"SNSW-001P16EU","gen":2,"fw_id":"20230912-082036/1.0.3-g6176478","ver":"1.0.3","app":"Plus1PM","auth_en":true,"auth_domain":"shellyplus1pm-a8032ab12345"}"#;

    #[tokio::test]
    async fn build_probes_through_digest() {
        let server = MockServer::start().await;
        mount_protected(&server, "/rpc/Shelly.GetDeviceInfo", DEVICE_INFO, 1, 1).await;
        mount_protected(
            &server,
            "/rpc/Switch.GetStatus",
            r#"{"id":0,"source":"init","output":true,"apower":8.9,"temperature":{"tC":38.2,"tF":100.8}}"#,
            1,
            1,
        )
        .await;

        let device = Device::http(server.uri())
            .with_password(PASSWORD)
            .build()
            .await
            .unwrap();

        assert_eq!(device.name(), server.uri());
        assert_eq!(device.capabilities(), &Capabilities::plus_1pm());

        let status = device.switch(0).unwrap().status().await.unwrap();
        assert!(status.output);
        assert_eq!(status.apower, Some(8.9));
    }

    #[tokio::test]
    async fn build_fails_when_probe_is_rejected() {
        let server = MockServer::start().await;
        mount_protected(&server, "/rpc/Shelly.GetDeviceInfo", DEVICE_INFO, 0, 2).await;

        let err = Device::http(server.uri())
            .with_password("wrong")
            .build()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Rpc { status: 401 }));
    }

    #[tokio::test]
    async fn switch_set_sends_requested_state() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rpc/Switch.Set"))
            .and(query_param("id", "0"))
            .and(query_param("on", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"was_on":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let device = Device::http(server.uri())
            .with_capabilities(Capabilities::plug_plus_s())
            .build_without_probe()
            .unwrap();

        let response = device.switch(0).unwrap().set(false).await.unwrap();
        assert!(response.was_on);
    }
}
