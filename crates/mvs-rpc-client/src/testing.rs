//! In-memory transport for unit tests

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use url::Url;

use crate::client::RpcClient;
use crate::config::ClientConfig;
use crate::error::RpcClientResult;
use crate::transport::{ApiVersion, Transport, TransportResponse, endpoint_for, parse_endpoint};

type Responder = Box<dyn Fn(&Value) -> Vec<u8> + Send + Sync>;

/// Request captured by [`ScriptedTransport`]
#[derive(Debug, Clone)]
pub(crate) struct SeenRequest {
    pub api: ApiVersion,
    pub body: Value,
}

impl SeenRequest {
    pub fn method(&self) -> &str {
        self.body["method"].as_str().unwrap_or_default()
    }

    pub fn params(&self) -> &Vec<Value> {
        self.body["params"].as_array().expect("params is an array")
    }
}

/// Answers every request through a closure and records what was sent
pub(crate) struct ScriptedTransport {
    endpoint: Url,
    responder: Responder,
    seen: Arc<parking_lot::Mutex<Vec<SeenRequest>>>,
}

impl ScriptedTransport {
    pub fn new<F>(responder: F) -> (Self, Arc<parking_lot::Mutex<Vec<SeenRequest>>>)
    where
        F: Fn(&Value) -> Vec<u8> + Send + Sync + 'static,
    {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let transport = Self {
            endpoint: parse_endpoint(crate::config::DEFAULT_ENDPOINT).expect("default endpoint"),
            responder: Box::new(responder),
            seen: Arc::clone(&seen),
        };
        (transport, seen)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    fn endpoint(&self, api: ApiVersion) -> RpcClientResult<Url> {
        endpoint_for(&self.endpoint, api)
    }

    async fn post(&self, api: ApiVersion, body: Vec<u8>) -> RpcClientResult<TransportResponse> {
        let request: Value = serde_json::from_slice(&body)?;
        let reply = (self.responder)(&request);
        self.seen.lock().push(SeenRequest { api, body: request });
        Ok(TransportResponse::new(200, reply))
    }
}

/// Reply with `result` under the request's own id
pub(crate) fn reply_result(result: Value) -> impl Fn(&Value) -> Vec<u8> + Send + Sync + 'static {
    move |request: &Value| {
        serde_json::to_vec(&json!({"id": request["id"], "jsonrpc": "2.0", "result": result}))
            .expect("serializable reply")
    }
}

/// Reply with a JSON-RPC error under the request's own id
pub(crate) fn reply_error(
    code: i64,
    message: &'static str,
) -> impl Fn(&Value) -> Vec<u8> + Send + Sync + 'static {
    move |request: &Value| {
        serde_json::to_vec(&json!({
            "id": request["id"],
            "jsonrpc": "2.0",
            "error": {"code": code, "message": message}
        }))
        .expect("serializable reply")
    }
}

/// Client wired to a scripted transport, plus the captured requests
pub(crate) fn scripted_client<F>(responder: F) -> (RpcClient, Arc<parking_lot::Mutex<Vec<SeenRequest>>>)
where
    F: Fn(&Value) -> Vec<u8> + Send + Sync + 'static,
{
    let (transport, seen) = ScriptedTransport::new(responder);
    (RpcClient::new(Box::new(transport), ClientConfig::default()), seen)
}

/// Most recent captured request
pub(crate) fn last_request(seen: &Arc<parking_lot::Mutex<Vec<SeenRequest>>>) -> SeenRequest {
    seen.lock().last().cloned().expect("a request was sent")
}
