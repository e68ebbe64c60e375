use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::types::RequestId;

/// The `error` member of a failed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcErrorObject {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// `(code, message)` pair as test code usually compares it
    pub fn as_pair(&self) -> (i64, &str) {
        (self.code, self.message.as_str())
    }
}

impl fmt::Display for RpcErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON-RPC Error {}: {}", self.code, self.message)
    }
}

/// Faults found while decoding a response body.
///
/// None of these are expected at runtime; each one means the node or the
/// transport broke the request/response contract.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response id mismatch: expected {expected}, got {}", display_id(.actual))]
    IdMismatch {
        expected: u64,
        actual: Option<RequestId>,
    },

    #[error("Response {id} carries neither result nor error")]
    MissingOutcome { id: u64 },
}

fn display_id(id: &Option<RequestId>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_codes_kept_raw() {
        // Node command errors sit outside the reserved -32xxx range
        for code in [-1_i64, 1000, 5001, -32601] {
            let error: RpcErrorObject = serde_json::from_value(
                json!({"code": code, "message": "failed", "data": {"hint": 1}}),
            )
            .unwrap();
            assert_eq!(error.as_pair(), (code, "failed"));
            assert_eq!(error.data, Some(json!({"hint": 1})));
        }
    }

    #[test]
    fn test_error_object_deserialization() {
        let error: RpcErrorObject =
            serde_json::from_value(json!({"code": -1, "message": "bad password"})).unwrap();
        assert_eq!(error.as_pair(), (-1, "bad password"));
        assert!(error.data.is_none());
        assert_eq!(error.to_string(), "JSON-RPC Error -1: bad password");
    }

    #[test]
    fn test_id_mismatch_message() {
        let err = ResponseError::IdMismatch {
            expected: 5,
            actual: Some(RequestId::Number(6)),
        };
        assert_eq!(err.to_string(), "Response id mismatch: expected 5, got 6");

        let err = ResponseError::IdMismatch {
            expected: 5,
            actual: None,
        };
        assert!(err.to_string().ends_with("got null"));
    }
}
