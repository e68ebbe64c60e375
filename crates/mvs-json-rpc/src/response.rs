use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{ResponseError, RpcErrorObject};
use crate::types::RequestId;

/// A decoded response body.
///
/// `result` distinguishes a present `null` (`Some(Value::Null)`) from a missing
/// key (`None`); void methods answer with the former.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Option<RequestId>,
    #[serde(rename = "jsonrpc", default)]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// What the node said about a call, once the envelope checks have passed
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    Result(Value),
    Error(RpcErrorObject),
}

impl RpcResponse {
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            id: Some(RequestId::Number(id)),
            version: Some(crate::JSONRPC_VERSION.to_string()),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: u64, error: RpcErrorObject) -> Self {
        Self {
            id: Some(RequestId::Number(id)),
            version: Some(crate::JSONRPC_VERSION.to_string()),
            result: None,
            error: Some(error),
        }
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, ResponseError> {
        let response: RpcResponse = serde_json::from_slice(body)?;
        response.warn_on_version();
        Ok(response)
    }

    fn warn_on_version(&self) {
        match self.version.as_deref() {
            Some(crate::JSONRPC_VERSION) => {}
            other => warn!(
                version = ?other,
                id = ?self.id,
                "Response carries unexpected jsonrpc tag"
            ),
        }
    }

    /// Fail unless the echoed id is the numeric id we sent
    pub fn verify_id(&self, expected: u64) -> Result<(), ResponseError> {
        match &self.id {
            Some(RequestId::Number(id)) if *id == expected => Ok(()),
            other => Err(ResponseError::IdMismatch {
                expected,
                actual: other.clone(),
            }),
        }
    }

    /// Split into the node's answer. An error object wins over any result.
    pub fn into_outcome(self, id: u64) -> Result<ResponseOutcome, ResponseError> {
        if let Some(error) = self.error {
            return Ok(ResponseOutcome::Error(error));
        }

        self.result
            .map(ResponseOutcome::Result)
            .ok_or(ResponseError::MissingOutcome { id })
    }

    /// Decode, check the id and split, in that order
    pub fn decode(body: &[u8], expected_id: u64) -> Result<ResponseOutcome, ResponseError> {
        let response = Self::from_slice(body)?;
        response.verify_id(expected_id)?;
        response.into_outcome(expected_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let body = br#"{"id":1,"jsonrpc":"2.0","result":{"peers":["10.10.10.184:52644"]}}"#;
        let outcome = RpcResponse::decode(body, 1).unwrap();
        assert_eq!(
            outcome,
            ResponseOutcome::Result(json!({"peers": ["10.10.10.184:52644"]}))
        );
    }

    #[test]
    fn test_error_response() {
        let body = br#"{"id":5,"jsonrpc":"2.0","error":{"code":-1,"message":"bad password"}}"#;
        let outcome = RpcResponse::decode(body, 5).unwrap();
        assert_eq!(
            outcome,
            ResponseOutcome::Error(RpcErrorObject::new(-1, "bad password"))
        );
    }

    #[test]
    fn test_null_result_is_present() {
        let response: RpcResponse =
            serde_json::from_str(r#"{"id":2,"jsonrpc":"2.0","result":null}"#).unwrap();
        assert_eq!(response.result, Some(Value::Null));
        assert_eq!(
            response.into_outcome(2).unwrap(),
            ResponseOutcome::Result(Value::Null)
        );
    }

    #[test]
    fn test_missing_result_is_a_fault() {
        let err = RpcResponse::decode(br#"{"id":2,"jsonrpc":"2.0"}"#, 2).unwrap_err();
        assert!(matches!(err, ResponseError::MissingOutcome { id: 2 }));
    }

    #[test]
    fn test_id_mismatch_is_checked_before_error_object() {
        let body = br#"{"id":6,"jsonrpc":"2.0","error":{"code":-1,"message":"bad password"}}"#;
        let err = RpcResponse::decode(body, 5).unwrap_err();
        match err {
            ResponseError::IdMismatch { expected, actual } => {
                assert_eq!(expected, 5);
                assert_eq!(actual, Some(RequestId::Number(6)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_string_id_does_not_match_numeric() {
        let body = br#"{"id":"5","jsonrpc":"2.0","result":true}"#;
        assert!(matches!(
            RpcResponse::decode(body, 5),
            Err(ResponseError::IdMismatch { .. })
        ));
    }

    #[test]
    fn test_null_id_is_a_mismatch() {
        let body = br#"{"id":null,"jsonrpc":"2.0","error":{"code":-32700,"message":"Parse error"}}"#;
        assert!(matches!(
            RpcResponse::decode(body, 1),
            Err(ResponseError::IdMismatch { actual: None, .. })
        ));
    }

    #[test]
    fn test_non_json_body() {
        let err = RpcResponse::decode(b"<html>502 Bad Gateway</html>", 1).unwrap_err();
        assert!(matches!(err, ResponseError::Parse(_)));
    }

    #[test]
    fn test_unexpected_version_is_tolerated() {
        let body = br#"{"id":3,"jsonrpc":"1.0","result":1}"#;
        assert_eq!(
            RpcResponse::decode(body, 3).unwrap(),
            ResponseOutcome::Result(json!(1))
        );
    }

    #[test]
    fn test_constructors_serialize() {
        let ok = serde_json::to_value(RpcResponse::success(9, json!(true))).unwrap();
        assert_eq!(ok, json!({"id": 9, "jsonrpc": "2.0", "result": true}));

        let failed =
            serde_json::to_value(RpcResponse::failure(9, RpcErrorObject::new(-1, "nope"))).unwrap();
        assert_eq!(
            failed,
            json!({"id": 9, "jsonrpc": "2.0", "error": {"code": -1, "message": "nope"}})
        );
    }
}
