//! Error types for RPC client operations
//!
//! Only faults live here: transport failures, undecodable bodies, id
//! mismatches, projector failures. A JSON-RPC `error` object sent by the node is
//! an ordinary answer and is returned as [`CallOutcome::Failure`](crate::CallOutcome).

use mvs_json_rpc::{RequestId, ResponseError};
use thiserror::Error;

/// Result type for RPC client operations
pub type RpcClientResult<T> = Result<T, RpcClientError>;

/// Faults that abort a call
#[derive(Error, Debug)]
pub enum RpcClientError {
    /// Transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Envelope contract violations
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Network/connection errors, including refused connects
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The result payload did not have the shape the endpoint wrapper expects
    #[error("Cannot project result of '{method}': {reason}")]
    Projection { method: String, reason: String },

    /// A wrapper was called with arguments the node would never accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Transport-specific errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP transport error: {0}")]
    Http(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Protocol-specific errors
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Response id mismatch: sent {expected}, received {}", display_id(.actual))]
    IdMismatch {
        expected: u64,
        actual: Option<RequestId>,
    },

    #[error("Invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}

fn display_id(id: &Option<RequestId>) -> String {
    id.as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "null".to_string())
}

impl RpcClientError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn projection(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Projection {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// The request may not have reached the node, or its reply was lost
    pub fn is_transport_fault(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Connection(_))
    }

    /// The node answered, but not with a well-formed reply to this request
    pub fn is_integrity_fault(&self) -> bool {
        matches!(self, Self::Protocol(_) | Self::Json(_))
    }
}

impl From<ResponseError> for RpcClientError {
    fn from(error: ResponseError) -> Self {
        match error {
            ResponseError::Parse(e) => Self::Json(e),
            ResponseError::IdMismatch { expected, actual } => {
                Self::Protocol(ProtocolError::IdMismatch { expected, actual })
            }
            ResponseError::MissingOutcome { id } => Self::Protocol(ProtocolError::InvalidResponse(
                format!("response {} carries neither result nor error", id),
            )),
        }
    }
}
