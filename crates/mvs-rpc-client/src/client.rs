//! Client session and the generic call routine every endpoint wrapper goes through

use mvs_json_rpc::{EnvelopeBuilder, OptionalArgs, ResponseOutcome, RpcResponse};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::call::{CallDeclaration, CallOutcome};
use crate::config::ClientConfig;
use crate::error::RpcClientResult;
use crate::transport::{
    ApiVersion, BoxedTransport, TransportFactory, TransportStatistics, parse_endpoint,
};

/// One client session against one node.
///
/// Owns the request-id counter, so ids are unique and increasing for as long as
/// the client lives. Calls take `&self` and may be issued concurrently.
pub struct RpcClient {
    /// Transport layer
    transport: BoxedTransport,
    /// Envelope builder holding the id counter
    envelopes: EnvelopeBuilder,
    /// Configuration
    config: ClientConfig,
}

impl RpcClient {
    /// Create a new client with the given transport
    pub fn new(transport: BoxedTransport, config: ClientConfig) -> Self {
        Self {
            transport,
            envelopes: EnvelopeBuilder::new(),
            config,
        }
    }

    /// HTTP client for the endpoint in `config`
    pub fn from_config(config: ClientConfig) -> RpcClientResult<Self> {
        RpcClientBuilder::new().with_config(config).build()
    }

    /// HTTP client for a node at `url` (the v2 endpoint)
    pub fn connect(url: &str) -> RpcClientResult<Self> {
        RpcClientBuilder::new().with_url(url)?.build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Id the next envelope will carry
    pub fn next_request_id(&self) -> u64 {
        self.envelopes.peek_next_id()
    }

    pub fn endpoint(&self, api: ApiVersion) -> RpcClientResult<Url> {
        self.transport.endpoint(api)
    }

    /// Get transport statistics
    pub fn transport_stats(&self) -> TransportStatistics {
        self.transport.statistics()
    }

    /// Perform one call: build, post, check the id, then project or report.
    ///
    /// `Err` means the call itself broke (transport failure, undecodable body,
    /// id mismatch, projector failure). A JSON-RPC error from the node comes
    /// back as `Ok(CallOutcome::Failure(_))` and the projector is not run.
    pub async fn invoke<T>(&self, declaration: CallDeclaration<T>) -> RpcClientResult<CallOutcome<T>> {
        let (call, projector) = declaration.into_parts();
        let envelope = self
            .envelopes
            .build(call.method, call.positional, &call.optional);

        if self.config.logging.log_requests {
            debug!(
                method = call.method,
                id = envelope.id,
                api = %call.api,
                params = envelope.params.len(),
                "Sending RPC request"
            );
        }

        let body = envelope.to_json()?;
        let response = self.transport.post(call.api, body).await?;

        let outcome = RpcResponse::decode(&response.body, envelope.id).inspect_err(|e| {
            warn!(
                method = call.method,
                id = envelope.id,
                status = response.status,
                error = %e,
                "Undecodable RPC response"
            );
        })?;

        match outcome {
            ResponseOutcome::Error(error) => {
                warn!(
                    method = call.method,
                    id = envelope.id,
                    code = error.code,
                    message = %error.message,
                    "Node returned JSON-RPC error"
                );
                Ok(CallOutcome::Failure(error))
            }
            ResponseOutcome::Result(result) => {
                if self.config.logging.log_responses {
                    debug!(method = call.method, id = envelope.id, result = %result, "RPC call succeeded");
                }
                Ok(CallOutcome::Success(projector(result)?))
            }
        }
    }

    /// Untyped escape hatch for methods without a wrapper
    pub async fn call(
        &self,
        method: &'static str,
        positional: Vec<Value>,
        optional: OptionalArgs,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(method)
                .args(positional)
                .with_optional(optional),
        )
        .await
    }
}

/// Builder for creating RPC clients
pub struct RpcClientBuilder {
    transport: Option<BoxedTransport>,
    config: Option<ClientConfig>,
}

impl RpcClientBuilder {
    /// Create a new client builder
    pub fn new() -> Self {
        Self {
            transport: None,
            config: None,
        }
    }

    /// Set transport; the endpoint in the configuration is then ignored
    pub fn with_transport(mut self, transport: BoxedTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Point the configuration at another v2 endpoint
    pub fn with_url(mut self, url: &str) -> RpcClientResult<Self> {
        parse_endpoint(url)?;
        let mut config = self.config.take().unwrap_or_default();
        config.endpoint.url = url.to_string();
        self.config = Some(config);
        Ok(self)
    }

    /// Set configuration
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the client, creating an HTTP transport if none was given
    pub fn build(self) -> RpcClientResult<RpcClient> {
        let config = self.config.unwrap_or_default();
        let transport = match self.transport {
            Some(transport) => transport,
            None => TransportFactory::from_config(&config)?,
        };

        info!(endpoint = %config.endpoint.url, "RPC client ready");
        Ok(RpcClient::new(transport, config))
    }
}

impl Default for RpcClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProtocolError, RpcClientError};
    use crate::testing::{last_request, reply_error, reply_result, scripted_client};
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_success_applies_projector() {
        let (client, seen) = scripted_client(reply_result(json!({"peers": ["10.0.0.1:5251"]})));

        let outcome = client
            .invoke(
                CallDeclaration::new("getpeerinfo")
                    .project(|result| Ok(result["peers"].as_array().cloned().unwrap_or_default())),
            )
            .await
            .unwrap();

        assert_eq!(outcome, CallOutcome::Success(vec![json!("10.0.0.1:5251")]));

        let request = last_request(&seen);
        assert_eq!(request.method(), "getpeerinfo");
        assert_eq!(request.body["id"], json!(1));
        assert_eq!(request.body["jsonrpc"], json!("2.0"));
        assert!(request.params().is_empty());
    }

    #[tokio::test]
    async fn test_error_reply_skips_projector() {
        let (client, _seen) = scripted_client(reply_error(-1, "bad password"));
        let projector_ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&projector_ran);

        let outcome = client
            .invoke(CallDeclaration::new("getbalance").arg("acct").arg("pw").project(
                move |result| {
                    flag.store(true, Ordering::SeqCst);
                    Ok(result)
                },
            ))
            .await
            .unwrap();

        assert_eq!(outcome.code(), -1);
        assert_eq!(outcome.message(), Some("bad password"));
        assert!(!projector_ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_forged_id_is_rejected() {
        let (client, _seen) = scripted_client(|request: &Value| {
            let forged = request["id"].as_u64().unwrap() + 1;
            serde_json::to_vec(&json!({"id": forged, "jsonrpc": "2.0", "result": "payload"})).unwrap()
        });

        let err = client
            .invoke(CallDeclaration::new("getinfo"))
            .await
            .unwrap_err();

        match err {
            RpcClientError::Protocol(ProtocolError::IdMismatch { expected, actual }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual.and_then(|id| id.as_number()), Some(2));
            }
            other => panic!("expected id mismatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_fault() {
        let (client, _seen) = scripted_client(|_: &Value| b"Internal Server Error".to_vec());

        let err = client
            .invoke(CallDeclaration::new("getinfo"))
            .await
            .unwrap_err();

        assert!(matches!(err, RpcClientError::Json(_)));
        assert!(err.is_integrity_fault());
    }

    #[tokio::test]
    async fn test_projector_failure_propagates() {
        let (client, _seen) = scripted_client(reply_result(json!({"unexpected": true})));

        let err = client
            .invoke(CallDeclaration::new("getpeerinfo").project(|result| {
                result
                    .get("peers")
                    .cloned()
                    .ok_or_else(|| RpcClientError::projection("getpeerinfo", "missing 'peers'"))
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, RpcClientError::Projection { .. }));
    }

    #[tokio::test]
    async fn test_ids_increase_per_call() {
        let (client, seen) = scripted_client(reply_result(json!(true)));

        assert_eq!(client.next_request_id(), 1);
        for _ in 0..3 {
            client.invoke(CallDeclaration::new("getinfo")).await.unwrap();
        }

        let ids: Vec<u64> = seen
            .lock()
            .iter()
            .map(|request| request.body["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(client.next_request_id(), 4);
    }

    #[tokio::test]
    async fn test_v3_declaration_uses_v3_api() {
        let (client, seen) = scripted_client(reply_result(json!(true)));

        client
            .invoke(CallDeclaration::new("eth_submitWork").api(ApiVersion::V3))
            .await
            .unwrap();

        assert_eq!(last_request(&seen).api, ApiVersion::V3);
        assert_eq!(
            client.endpoint(ApiVersion::V3).unwrap().as_str(),
            "http://127.0.0.1:8820/rpc/v3"
        );
    }

    #[tokio::test]
    async fn test_untyped_call() {
        let (client, seen) = scripted_client(reply_result(json!({"ok": 1})));

        let outcome = client
            .call(
                "listtxs",
                vec![json!("acct"), json!("pw")],
                OptionalArgs::new().optional("-a", None::<&str>).scalar("-l", 10),
            )
            .await
            .unwrap();

        assert_eq!(outcome.success(), Some(json!({"ok": 1})));
        assert_eq!(
            last_request(&seen).params(),
            &vec![json!("acct"), json!("pw"), json!("-l"), json!(10)]
        );
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        assert!(RpcClientBuilder::new().with_url("mailto:node").is_err());
    }

    #[test]
    fn test_builder_defaults_to_http_transport() {
        let client = RpcClientBuilder::new()
            .with_url("http://10.1.1.1:8820/rpc/v2")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(client.config().endpoint.url, "http://10.1.1.1:8820/rpc/v2");
        assert_eq!(
            client.endpoint(ApiVersion::V2).unwrap().as_str(),
            "http://10.1.1.1:8820/rpc/v2"
        );
    }
}
