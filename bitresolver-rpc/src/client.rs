//! Minimal JSON-RPC 1.0 client for a Namecoin node's `name_show` call.
//!
//! This client exposes a single operation,
//! `lookup(full_name) -> value`, built on top of namecoind's `name_show`.

use std::time::Duration;

use serde_json::{Value, json};

use crate::error::{NamecoinError, Result};
use crate::types::{NameRecord, RpcErrorBody, RpcRequest, RpcResponse};

const USER_AGENT: &str = "bitcoin-json-rpc/0.3.50";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection details and credentials for a Namecoin node's JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct NamecoinClient {
    host: String,
    port: u16,
    user: String,
    password: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl NamecoinClient {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }

    async fn send(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let body = RpcRequest { method, params, id: 1 };

        log::debug!("[namecoin] {method} {}", self.endpoint());

        let mut request = self
            .http
            .post(self.endpoint())
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .json(&body);

        if !self.user.is_empty() && !self.password.is_empty() {
            request = request.basic_auth(&self.user, Some(&self.password));
        }

        let response = request.send().await.map_err(|e| {
            log::error!("[namecoin] unable to connect: {e}");
            NamecoinError::new(format!("Unable to connect to Namecoin node: {e}"), 500)
        })?;

        let text = response.text().await.map_err(|e| {
            NamecoinError::new(format!("Unable to read namecoind rpc response: {e}"), 500)
        })?;

        let parsed: RpcResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!("[namecoin] unable to parse rpc response: {e}");
            NamecoinError::new(format!("Unable to parse namecoind rpc response: {e}"), 500)
        })?;

        match (parsed.result, parsed.error) {
            (Some(result), _) => Ok(result),
            (None, Some(RpcErrorBody { message, code })) => Err(NamecoinError::new(
                message.unwrap_or_default(),
                code.unwrap_or(0),
            )),
            (None, None) => Err(NamecoinError::new("Empty rpc response", 500)),
        }
    }

    /// Look up a Namecoin name (e.g. `"d/example"`).
    ///
    /// Returns `Ok(None)` when the node reports error code `-4` ("name not found"),
    /// matching namecoind's "name not found" sentinel. Any other RPC error
    /// propagates unchanged.
    pub async fn lookup(&self, full_name: &str) -> Result<Option<NameRecord>> {
        match self.send("name_show", vec![json!(full_name)]).await {
            Ok(result) => {
                let record: NameRecord = serde_json::from_value(result).map_err(|e| {
                    NamecoinError::new(format!("Malformed name_show result: {e}"), 500)
                })?;
                Ok(Some(record))
            }
            Err(e) if e.code == NamecoinError::NAME_NOT_FOUND => Ok(None),
            Err(e) => Err(e),
        }
    }
}
