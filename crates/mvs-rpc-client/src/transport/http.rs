//! HTTP transport implementation for the RPC client

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{RpcClientError, RpcClientResult, TransportError};
use crate::transport::{
    ApiVersion, Transport, TransportResponse, TransportStatistics, endpoint_for, parse_endpoint,
};

/// Plain HTTP POST transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client
    client: Client,
    /// v2 endpoint URL
    endpoint: Url,
    /// Statistics
    stats: Arc<parking_lot::Mutex<TransportStatistics>>,
}

impl HttpTransport {
    /// Create a new HTTP transport with default timeouts
    pub fn new(endpoint: &str) -> RpcClientResult<Self> {
        Self::from_config(&ClientConfig::with_endpoint(endpoint))
    }

    /// Create a transport honouring the timeouts and headers in `config`
    pub fn from_config(config: &ClientConfig) -> RpcClientResult<Self> {
        let endpoint = parse_endpoint(&config.endpoint.url)?;

        let mut builder = Client::builder()
            .connect_timeout(config.timeouts.connect)
            .timeout(config.timeouts.request)
            .default_headers(default_headers(config)?);

        if let Some(user_agent) = &config.connection.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(endpoint, client))
    }

    /// Create HTTP transport with custom client
    pub fn with_client(endpoint: Url, client: Client) -> Self {
        Self {
            client,
            endpoint,
            stats: Arc::new(parking_lot::Mutex::new(TransportStatistics::default())),
        }
    }

    /// Update statistics
    fn update_stats<F>(&self, update_fn: F)
    where
        F: FnOnce(&mut TransportStatistics),
    {
        let mut stats = self.stats.lock();
        update_fn(&mut stats);
    }

    fn record_error(&self, message: String) {
        self.update_stats(|stats| {
            stats.errors += 1;
            stats.last_error = Some(message);
        });
    }
}

fn default_headers(config: &ClientConfig) -> RpcClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(extra) = &config.connection.headers {
        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| RpcClientError::config(format!("header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| RpcClientError::config(format!("header value for '{}': {}", name, e)))?;
            headers.insert(name, value);
        }
    }

    Ok(headers)
}

#[async_trait]
impl Transport for HttpTransport {
    fn endpoint(&self, api: ApiVersion) -> RpcClientResult<Url> {
        endpoint_for(&self.endpoint, api)
    }

    async fn post(&self, api: ApiVersion, body: Vec<u8>) -> RpcClientResult<TransportResponse> {
        let url = self.endpoint(api)?;
        let start_time = Instant::now();

        debug!(url = %url, bytes = body.len(), "Sending HTTP request");
        self.update_stats(|stats| stats.requests_sent += 1);

        let response = match self.client.post(url.clone()).body(body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "HTTP request failed");
                self.record_error(e.to_string());
                return Err(e.into());
            }
        };

        // The node reports JSON-RPC errors with non-2xx codes too; the body decides.
        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %url, status = %status, error = %e, "Failed to read response body");
                self.record_error(e.to_string());
                return Err(e.into());
            }
        };

        let elapsed = start_time.elapsed();
        self.update_stats(|stats| {
            stats.responses_received += 1;
            let elapsed_ms = elapsed.as_millis() as f64;
            stats.avg_response_time_ms = (stats.avg_response_time_ms
                * (stats.responses_received - 1) as f64
                + elapsed_ms)
                / stats.responses_received as f64;
        });

        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = elapsed.as_millis(),
            "HTTP request completed"
        );

        Ok(TransportResponse::new(status.as_u16(), body))
    }

    fn statistics(&self) -> TransportStatistics {
        self.stats.lock().clone()
    }
}
