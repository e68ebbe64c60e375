use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

use crate::params::{OptionalArgs, build_params};
use crate::types::JsonRpcVersion;

/// A JSON-RPC request as sent to the node.
///
/// Field order matches the node's reference client: `method`, `id`, `jsonrpc`,
/// `params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub method: String,
    pub id: u64,
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub params: Vec<Value>,
}

impl RequestEnvelope {
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            id,
            version: JsonRpcVersion::V2_0,
            params,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Get a parameter by index
    pub fn param(&self, index: usize) -> Option<&Value> {
        self.params.get(index)
    }
}

/// Builds envelopes and hands out their ids.
///
/// Ids start at 1 and are taken at build time, so every envelope gets a distinct
/// id even if it is never sent. The counter is per builder; one builder is owned
/// by one client session.
#[derive(Debug)]
pub struct EnvelopeBuilder {
    next_id: AtomicU64,
}

impl EnvelopeBuilder {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first_id: u64) -> Self {
        Self {
            next_id: AtomicU64::new(first_id),
        }
    }

    /// Id the next call to [`build`](Self::build) will use
    pub fn peek_next_id(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst)
    }

    pub fn build(
        &self,
        method: impl Into<String>,
        positional: Vec<Value>,
        optional: &OptionalArgs,
    ) -> RequestEnvelope {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let envelope = RequestEnvelope::new(id, method, build_params(positional, optional));
        trace!(method = %envelope.method, id, params = envelope.params.len(), "Built envelope");
        envelope
    }
}

impl Default for EnvelopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
