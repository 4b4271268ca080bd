//! HTTP client for the Nuki bridge API.
//!
//! The bridge exposes a small GET-only surface on a fixed port; every call
//! carries the API token as a query parameter. This layer performs exactly
//! one request per invocation; retries live in [`crate::retry`].

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::BridgeError;

/// Port the bridge HTTP API listens on. Not configurable on the device.
pub const BRIDGE_PORT: u16 = 8080;

/// `deviceType` query parameter for Smart Lock 3.0.
const SMART_LOCK_DEVICE_TYPE: u8 = 4;

/// Build the base URL for a bridge reachable at `address`.
pub fn bridge_base_url(address: &str) -> String {
    format!("http://{}:{}", address, BRIDGE_PORT)
}

/// A lock action accepted by the `/lockAction` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    /// Action code 1: unlock the lock.
    Unlock,
    /// Action code 2: lock the lock.
    Lock,
}

impl LockAction {
    /// Numeric action code sent on the wire.
    pub fn code(&self) -> u8 {
        match self {
            LockAction::Unlock => 1,
            LockAction::Lock => 2,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            LockAction::Unlock => "unlock",
            LockAction::Lock => "lock",
        }
    }
}

impl fmt::Display for LockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Client for one bridge, carrying the base URL and token for every call.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    http: Client,
    base_url: String,
    token: String,
}

impl BridgeClient {
    /// Create a client with a fixed connection+read timeout.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BridgeError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BridgeError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// Fetch all devices paired with the bridge (`/list`).
    pub async fn list(&self) -> Result<Value, BridgeError> {
        self.get("/list", &[]).await
    }

    /// Fetch bridge runtime information (`/info`).
    pub async fn info(&self) -> Result<Value, BridgeError> {
        self.get("/info", &[]).await
    }

    /// Trigger a lock action on one device (`/lockAction`).
    pub async fn lock_action(
        &self,
        nuki_id: u64,
        action: LockAction,
    ) -> Result<Value, BridgeError> {
        self.get(
            "/lockAction",
            &[
                ("nukiId", nuki_id.to_string()),
                ("action", action.code().to_string()),
                ("deviceType", SMART_LOCK_DEVICE_TYPE.to_string()),
            ],
        )
        .await
    }

    /// Poll the current state of one device (`/lockState`).
    ///
    /// The bridge queries the lock over BLE for this, so it is slower than
    /// `/list` and drains the lock battery when hammered.
    pub async fn lock_state(&self, nuki_id: u64) -> Result<Value, BridgeError> {
        self.get(
            "/lockState",
            &[
                ("nukiId", nuki_id.to_string()),
                ("deviceType", SMART_LOCK_DEVICE_TYPE.to_string()),
            ],
        )
        .await
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, BridgeError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| BridgeError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::Protocol {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| BridgeError::Transport {
            url,
            source: e,
        })?;

        serde_json::from_str(&body).map_err(|e| BridgeError::Malformed {
            path: path.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[test]
    fn test_bridge_base_url() {
        assert_eq!(bridge_base_url("192.168.1.50"), "http://192.168.1.50:8080");
    }

    #[test]
    fn test_lock_action_codes() {
        assert_eq!(LockAction::Unlock.code(), 1);
        assert_eq!(LockAction::Lock.code(), 2);
        assert_eq!(LockAction::Lock.to_string(), "lock");
    }

    #[tokio::test]
    async fn test_lock_action_query_params() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/lockAction")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("token".into(), "sekrit".into()),
                Matcher::UrlEncoded("nukiId".into(), "123456789".into()),
                Matcher::UrlEncoded("action".into(), "1".into()),
                Matcher::UrlEncoded("deviceType".into(), "4".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let client = BridgeClient::new(server.url(), "sekrit", TIMEOUT).unwrap();
        let body = client.lock_action(123456789, LockAction::Unlock).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_list_sends_token() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/list")
            .match_query(Matcher::UrlEncoded("token".into(), "sekrit".into()))
            .with_status(200)
            .with_body(r#"[{"nukiId": 1, "name": "Front"}]"#)
            .create_async()
            .await;

        let client = BridgeClient::new(server.url(), "sekrit", TIMEOUT).unwrap();
        let body = client.list().await.unwrap();

        mock.assert_async().await;
        assert!(body.is_array());
    }

    #[tokio::test]
    async fn test_non_2xx_is_protocol_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/lockState")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = BridgeClient::new(server.url(), "sekrit", TIMEOUT).unwrap();
        let err = client.lock_state(1).await.unwrap_err();

        match err {
            BridgeError::Protocol { path, status } => {
                assert_eq!(path, "/lockState");
                assert_eq!(status, 503);
            }
            other => panic!("expected protocol error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_body_is_malformed_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/info")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("HTTP/1.0 200 OK")
            .create_async()
            .await;

        let client = BridgeClient::new(server.url(), "sekrit", TIMEOUT).unwrap();
        let err = client.info().await.unwrap_err();

        assert!(matches!(err, BridgeError::Malformed { .. }));
    }
}
