//! Chain and block queries

use serde_json::Value;

use crate::api::projection::{field_number, field_str, field_strings};
use crate::call::{CallDeclaration, CallOutcome};
use crate::client::RpcClient;
use crate::error::RpcClientResult;
use crate::methods;

/// Block looked up by hash or by height
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRef {
    Hash(String),
    Height(u64),
}

impl From<u64> for BlockRef {
    fn from(height: u64) -> Self {
        BlockRef::Height(height)
    }
}

impl From<&str> for BlockRef {
    fn from(hash: &str) -> Self {
        BlockRef::Hash(hash.to_string())
    }
}

impl From<BlockRef> for Value {
    fn from(block: BlockRef) -> Self {
        match block {
            BlockRef::Hash(hash) => Value::String(hash),
            BlockRef::Height(height) => Value::from(height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeaderSummary {
    pub hash: String,
    pub number: u64,
}

/// Chain tip as reported by `getinfo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub height: u64,
    pub difficulty: u64,
}

impl RpcClient {
    /// Addresses of connected peers
    pub async fn get_peer_info(&self) -> RpcClientResult<CallOutcome<Vec<String>>> {
        self.invoke(
            CallDeclaration::new(methods::GET_PEER_INFO).project(|mut result| {
                field_strings(methods::GET_PEER_INFO, &mut result, "peers")
            }),
        )
        .await
    }

    /// Header by hash (`-s`) or height (`-t`), reduced to hash and number
    pub async fn get_block_header_summary(
        &self,
        hash: Option<&str>,
        height: Option<u64>,
    ) -> RpcClientResult<CallOutcome<BlockHeaderSummary>> {
        self.invoke(block_header(hash, height).project(|mut result| {
            Ok(BlockHeaderSummary {
                hash: field_str(methods::GET_BLOCK_HEADER, &mut result, "hash")?,
                number: field_number(methods::GET_BLOCK_HEADER, &mut result, "number")?,
            })
        }))
        .await
    }

    /// Full header object
    pub async fn get_block_header(
        &self,
        hash: Option<&str>,
        height: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(block_header(hash, height)).await
    }

    pub async fn get_info(&self) -> RpcClientResult<CallOutcome<ChainInfo>> {
        self.invoke(CallDeclaration::new(methods::GET_INFO).project(|mut result| {
            Ok(ChainInfo {
                height: field_number(methods::GET_INFO, &mut result, "height")?,
                difficulty: field_number(methods::GET_INFO, &mut result, "difficulty")?,
            })
        }))
        .await
    }

    /// `json` and `tx_json` pick JSON or raw encoding for the block and its transactions
    pub async fn get_block(
        &self,
        block: impl Into<BlockRef>,
        json: bool,
        tx_json: bool,
    ) -> RpcClientResult<CallOutcome<Value>> {
        let block: BlockRef = block.into();
        self.invoke(
            CallDeclaration::new(methods::GET_BLOCK)
                .arg(block)
                .arg(json)
                .arg(tx_json),
        )
        .await
    }

    pub async fn get_tx(&self, tx_hash: &str, json: Option<bool>) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::GET_TX)
                .arg(tx_hash)
                .opt_flag("--json", json),
        )
        .await
    }
}

fn block_header(hash: Option<&str>, height: Option<u64>) -> CallDeclaration {
    CallDeclaration::new(methods::GET_BLOCK_HEADER)
        .opt_flag("-s", hash)
        .opt_flag("-t", height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RpcClientError;
    use crate::testing::{last_request, reply_result, scripted_client};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_peer_info() {
        let (client, seen) = scripted_client(reply_result(json!({"peers": ["10.10.10.184:52644"]})));

        let peers = client.get_peer_info().await.unwrap().success().unwrap();
        assert_eq!(peers, vec!["10.10.10.184:52644"]);

        let request = last_request(&seen);
        assert_eq!(request.method(), "getpeerinfo");
        assert!(request.params().is_empty());
    }

    #[tokio::test]
    async fn test_block_header_by_height_only() {
        let (client, seen) = scripted_client(reply_result(json!({
            "hash": "00ab",
            "number": 120,
            "bits": "1"
        })));

        let summary = client
            .get_block_header_summary(None, Some(120))
            .await
            .unwrap()
            .success()
            .unwrap();

        assert_eq!(
            summary,
            BlockHeaderSummary {
                hash: "00ab".to_string(),
                number: 120
            }
        );
        assert_eq!(last_request(&seen).params(), &vec![json!("-t"), json!(120)]);
    }

    #[tokio::test]
    async fn test_get_info_parses_quoted_numbers() {
        let (client, _seen) = scripted_client(reply_result(json!({
            "height": "1000",
            "difficulty": "3000000"
        })));

        let info = client.get_info().await.unwrap().success().unwrap();
        assert_eq!(
            info,
            ChainInfo {
                height: 1000,
                difficulty: 3_000_000
            }
        );
    }

    #[tokio::test]
    async fn test_get_info_missing_field() {
        let (client, _seen) = scripted_client(reply_result(json!({"height": 5})));

        let err = client.get_info().await.unwrap_err();
        assert!(matches!(err, RpcClientError::Projection { .. }));
    }

    #[tokio::test]
    async fn test_get_block_positional_order() {
        let (client, seen) = scripted_client(reply_result(json!({})));

        client.get_block("00ff", true, false).await.unwrap();
        assert_eq!(
            last_request(&seen).params(),
            &vec![json!("00ff"), json!(true), json!(false)]
        );

        client.get_block(42u64, false, true).await.unwrap();
        assert_eq!(
            last_request(&seen).params(),
            &vec![json!(42), json!(false), json!(true)]
        );
    }

    #[tokio::test]
    async fn test_get_tx_omits_absent_json_flag() {
        let (client, seen) = scripted_client(reply_result(json!({})));

        client.get_tx("beef", None).await.unwrap();
        assert_eq!(last_request(&seen).params(), &vec![json!("beef")]);

        client.get_tx("beef", Some(false)).await.unwrap();
        assert_eq!(
            last_request(&seen).params(),
            &vec![json!("beef"), json!("--json"), json!(false)]
        );
    }
}
