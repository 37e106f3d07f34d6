//! Mock JSON-RPC server for testing delegate node interactions
//!
//! This simulates the delegate client's RPC endpoint without requiring a real node.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock RPC server that simulates delegate client responses
pub struct MockRpcServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockRpcServer {
    /// Create a new mock RPC server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// URL to put in the node config
    pub fn rpc_url(&self) -> String {
        format!("{}/rpc", self.base_url)
    }

    async fn mock_result(&self, rpc_method: &str, result: Value) {
        Mock::given(method("POST"))
            .and(path("/rpc"))
            .and(body_partial_json(json!({ "method": rpc_method })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": "1",
                "result": result
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock `get_info` of a running client
    pub async fn mock_get_info(&self, connections: u64, head_block_age: u64) {
        self.mock_result(
            "get_info",
            json!({
                "blockchain_head_block_num": 1234567,
                "blockchain_head_block_age": head_block_age,
                "network_num_connections": connections,
                "wallet_open": true
            }),
        )
        .await;
    }

    /// Mock slot records, oldest first; `true` means the slot was produced
    pub async fn mock_slot_records(&self, produced: &[bool]) {
        let records: Vec<Value> = produced
            .iter()
            .enumerate()
            .map(|(i, produced)| {
                json!({
                    "index": { "timestamp": format!("20141003T10{:04}", i), "delegate_id": 17 },
                    "block_id": if *produced { Value::from(format!("{:040x}", i + 1)) } else { Value::Null }
                })
            })
            .collect();

        self.mock_result("blockchain_get_delegate_slot_records", Value::Array(records))
            .await;
    }

    /// Mock a JSON-RPC level error for one method
    pub async fn mock_rpc_error(&self, rpc_method: &str, code: i64, message: &str) {
        Mock::given(method("POST"))
            .and(path("/rpc"))
            .and(body_partial_json(json!({ "method": rpc_method })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": "1",
                "error": { "code": code, "message": message }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock HTTP failure for every request
    pub async fn mock_http_error(&self, status_code: u16) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
