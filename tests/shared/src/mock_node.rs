//! In-process stand-in for an MVS node's RPC endpoints

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, info};

type Responder = Arc<dyn Fn(&str, &Value) -> MockReply + Send + Sync>;

/// What the mock node sends back for one request
#[derive(Debug, Clone)]
pub enum MockReply {
    /// JSON body with status 200
    Json(Value),
    /// Arbitrary body and status
    Raw { status: u16, body: String },
}

impl MockReply {
    /// Success reply echoing the request's id
    pub fn result(request: &Value, result: Value) -> Self {
        MockReply::Json(json!({"id": request["id"], "jsonrpc": "2.0", "result": result}))
    }

    /// JSON-RPC error reply echoing the request's id
    pub fn error(request: &Value, code: i64, message: &str) -> Self {
        MockReply::Json(json!({
            "id": request["id"],
            "jsonrpc": "2.0",
            "error": {"code": code, "message": message}
        }))
    }
}

/// Request as the mock node received it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    /// Body text exactly as received
    pub raw: String,
    /// Parsed body, `Null` if it was not JSON
    pub body: Value,
}

impl RecordedRequest {
    pub fn method(&self) -> &str {
        self.body["method"].as_str().unwrap_or_default()
    }

    pub fn id(&self) -> Option<u64> {
        self.body["id"].as_u64()
    }

    pub fn params(&self) -> Vec<Value> {
        self.body["params"].as_array().cloned().unwrap_or_default()
    }
}

struct NodeState {
    responder: Responder,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// HTTP/1 server on an ephemeral localhost port.
///
/// The server task is aborted when the handle is dropped.
pub struct MockNode {
    addr: SocketAddr,
    state: Arc<NodeState>,
    server: JoinHandle<()>,
}

impl MockNode {
    /// Start a node that answers every request through `responder`,
    /// which receives the request path and parsed body.
    pub async fn start<F>(responder: F) -> anyhow::Result<Self>
    where
        F: Fn(&str, &Value) -> MockReply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(NodeState {
            responder: Arc::new(responder),
            requests: Mutex::new(Vec::new()),
        });

        info!("Mock node listening on {}", addr);

        let server_state = Arc::clone(&state);
        let server = tokio::spawn(async move {
            loop {
                let (stream, peer_addr) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(e) => {
                        debug!("Mock node accept failed: {}", e);
                        continue;
                    }
                };
                debug!("New connection from {}", peer_addr);

                let state = Arc::clone(&server_state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);
                    let service = service_fn(move |req| handle_request(req, Arc::clone(&state)));

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        debug!("Mock node connection error: {}", err);
                    }
                });
            }
        });

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    /// Node that answers every call with `result`
    pub async fn with_result(result: Value) -> anyhow::Result<Self> {
        Self::start(move |_, request| MockReply::result(request, result.clone())).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The node's v2 endpoint
    pub fn url(&self) -> String {
        format!("http://{}/rpc/v2", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().last().cloned()
    }
}

impl Drop for MockNode {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle_request(
    req: Request<Incoming>,
    state: Arc<NodeState>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let path = req.uri().path().to_string();
    let bytes = req.into_body().collect().await?.to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    debug!(path = %path, method = ?body.get("method"), "Mock node request");

    let reply = (state.responder)(&path, &body);
    state.requests.lock().push(RecordedRequest {
        path,
        raw: String::from_utf8_lossy(&bytes).into_owned(),
        body,
    });

    let (status, payload) = match reply {
        MockReply::Json(value) => (StatusCode::OK, value.to_string()),
        MockReply::Raw { status, body } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        ),
    };

    let mut response = Response::new(Full::new(Bytes::from(payload)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(response)
}
