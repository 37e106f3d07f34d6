//! JSON-RPC access to the delegate node
//!
//! [`NodeHandle`] is what the monitoring loop talks to. [`BtsRpcClient`]
//! implements it against the client's HTTP JSON-RPC endpoint and memoises
//! answers until [`NodeHandle::clear_rpc_cache`] is called, so a tick that
//! asks `is_online` and then `get_info` hits the node once.

use crate::config::NodeConfig;
use crate::errors::RpcError;
use crate::health::{NodeInfo, Streak};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::debug;
use uuid::Uuid;

#[async_trait]
pub trait NodeHandle: Send + Sync {
    /// Host identifier of the node, `localhost` for the local machine
    fn host(&self) -> &str;

    /// Forget memoised answers so the next query reflects fresh state
    async fn clear_rpc_cache(&self);

    async fn is_online(&self) -> bool;

    async fn get_info(&self) -> Result<NodeInfo>;

    async fn get_streak(&self) -> Result<Streak>;
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct SlotRecord {
    block_id: Option<String>,
}

pub struct BtsRpcClient {
    host: String,
    rpc_url: String,
    delegate_name: String,
    rpc_user: Option<String>,
    rpc_password: Option<String>,
    rpc_timeout: Duration,
    client: HttpClient,
    cache: Mutex<HashMap<String, Value>>,
}

impl BtsRpcClient {
    pub fn new(node_config: &NodeConfig, rpc_timeout_seconds: u64) -> Result<Self> {
        let rpc_timeout = Duration::from_secs(rpc_timeout_seconds);
        let client = HttpClient::builder()
            .timeout(rpc_timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            host: node_config.host.clone(),
            rpc_url: node_config.rpc_url.clone(),
            delegate_name: node_config.delegate_name.clone(),
            rpc_user: node_config.rpc_user.clone(),
            rpc_password: node_config.rpc_password.clone(),
            rpc_timeout,
            client,
            cache: Mutex::new(HashMap::new()),
        })
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let cache_key = format!("{}:{}", method, params);
        if let Some(cached) = self.cache.lock().await.get(&cache_key) {
            return Ok(cached.clone());
        }

        let request_body = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": Uuid::new_v4().to_string()
        });

        let mut request = self.client.post(&self.rpc_url).json(&request_body);
        if let Some(user) = &self.rpc_user {
            request = request.basic_auth(user, self.rpc_password.as_ref());
        }

        let response = timeout(self.rpc_timeout, request.send())
            .await
            .map_err(|_| RpcError::Transport {
                url: self.rpc_url.clone(),
                reason: "request timeout".to_string(),
            })?
            .map_err(|e| RpcError::Transport {
                url: self.rpc_url.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(RpcError::Transport {
                url: self.rpc_url.clone(),
                reason: format!("HTTP error {}", response.status()),
            }
            .into());
        }

        let rpc_response: RpcResponse =
            response
                .json()
                .await
                .map_err(|e| RpcError::InvalidResponse {
                    method: method.to_string(),
                    reason: e.to_string(),
                })?;

        if let Some(error) = rpc_response.error {
            return Err(RpcError::Remote {
                method: method.to_string(),
                code: error.code,
                message: error.message,
            }
            .into());
        }

        let result = rpc_response.result.ok_or_else(|| RpcError::InvalidResponse {
            method: method.to_string(),
            reason: "missing result".to_string(),
        })?;

        self.cache.lock().await.insert(cache_key, result.clone());
        Ok(result)
    }
}

#[async_trait]
impl NodeHandle for BtsRpcClient {
    fn host(&self) -> &str {
        &self.host
    }

    async fn clear_rpc_cache(&self) {
        self.cache.lock().await.clear();
    }

    async fn is_online(&self) -> bool {
        match self.get_info().await {
            Ok(_) => true,
            Err(e) => {
                debug!("Node {} unreachable: {}", self.host, e);
                false
            }
        }
    }

    async fn get_info(&self) -> Result<NodeInfo> {
        let value = self.call("get_info", serde_json::json!([])).await?;
        let info = serde_json::from_value(value).map_err(|e| RpcError::InvalidResponse {
            method: "get_info".to_string(),
            reason: e.to_string(),
        })?;
        Ok(info)
    }

    async fn get_streak(&self) -> Result<Streak> {
        let method = "blockchain_get_delegate_slot_records";
        let value = self
            .call(method, serde_json::json!([self.delegate_name]))
            .await?;
        let slots: Vec<SlotRecord> =
            serde_json::from_value(value).map_err(|e| RpcError::InvalidResponse {
                method: method.to_string(),
                reason: e.to_string(),
            })?;

        Ok(streak_from_slots(&slots))
    }
}

/// Records come oldest first; the streak is the run of most recent slots
/// that share the latest slot's produced/missed status.
fn streak_from_slots(slots: &[SlotRecord]) -> Streak {
    let Some(latest) = slots.last() else {
        return Streak {
            producing: true,
            streak_length: 0,
        };
    };

    let producing = latest.block_id.is_some();
    let streak_length = slots
        .iter()
        .rev()
        .take_while(|slot| slot.block_id.is_some() == producing)
        .count() as u64;

    Streak {
        producing,
        streak_length,
    }
}
