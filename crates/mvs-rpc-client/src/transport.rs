//! Transport layer for the RPC client

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{RpcClientResult, TransportError};

pub mod http;

pub use http::HttpTransport;

/// Which of the node's RPC endpoints a method lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// The node's native API
    #[default]
    V2,
    /// Ethereum-compatible mining endpoints
    V3,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V2 => write!(f, "v2"),
            ApiVersion::V3 => write!(f, "v3"),
        }
    }
}

/// Raw reply from one POST
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status, recorded for diagnostics only
    pub status: u16,
    /// Response body, undecoded
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport trait: one request body in, one response body out
#[async_trait]
pub trait Transport: Send + Sync {
    /// URL requests for `api` are posted to
    fn endpoint(&self, api: ApiVersion) -> RpcClientResult<Url>;

    /// POST `body` to the endpoint for `api`. Exactly one round trip; no retries.
    async fn post(&self, api: ApiVersion, body: Vec<u8>) -> RpcClientResult<TransportResponse>;

    /// Get transport statistics
    fn statistics(&self) -> TransportStatistics {
        TransportStatistics::default()
    }
}

/// Type alias for a boxed transport
pub type BoxedTransport = Box<dyn Transport>;

/// Transport statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct TransportStatistics {
    /// Number of requests sent
    pub requests_sent: u64,
    /// Number of responses received
    pub responses_received: u64,
    /// Number of errors encountered
    pub errors: u64,
    /// Average response time
    pub avg_response_time_ms: f64,
    /// Last error message
    pub last_error: Option<String>,
}

/// Derive the URL for `api` from the configured v2 URL.
///
/// The v3 API sits next to v2 on the node, so the `/v2` path segment is swapped
/// for `/v3`. A base URL without `/v2` in its path cannot be mapped.
pub fn endpoint_for(base: &Url, api: ApiVersion) -> RpcClientResult<Url> {
    match api {
        ApiVersion::V2 => Ok(base.clone()),
        ApiVersion::V3 => {
            let path = base.path();
            if !path.contains("/v2") {
                return Err(TransportError::InvalidEndpoint(format!(
                    "cannot derive v3 endpoint from '{}': path has no /v2 segment",
                    base
                ))
                .into());
            }

            let mut url = base.clone();
            url.set_path(&path.replacen("/v2", "/v3", 1));
            Ok(url)
        }
    }
}

/// Parse and validate an endpoint URL
pub fn parse_endpoint(url_str: &str) -> RpcClientResult<Url> {
    let url = Url::parse(url_str)
        .map_err(|e| TransportError::InvalidEndpoint(format!("'{}': {}", url_str, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(TransportError::InvalidEndpoint(format!(
            "unsupported scheme '{}' in '{}'",
            scheme, url_str
        ))
        .into()),
    }
}

/// Transport factory for creating transport instances
pub struct TransportFactory;

impl TransportFactory {
    /// HTTP transport for the configured endpoint
    pub fn from_config(config: &ClientConfig) -> RpcClientResult<BoxedTransport> {
        Ok(Box::new(HttpTransport::from_config(config)?))
    }
}
