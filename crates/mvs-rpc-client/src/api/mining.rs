//! Mining control and the Ethereum-compatible work endpoints

use serde_json::Value;

use crate::api::projection::strings;
use crate::call::{CallDeclaration, CallOutcome};
use crate::client::RpcClient;
use crate::error::{RpcClientError, RpcClientResult};
use crate::methods;
use crate::transport::ApiVersion;

/// Current mining job from `eth_getWork`, as the node encodes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    /// Passed through verbatim; not normalised to `0x`-prefixed hex
    pub header_hash: String,
    pub seed_hash: String,
    pub boundary: String,
}

impl RpcClient {
    /// Direct block rewards to `address`
    pub async fn set_mining_account(
        &self,
        account: &str,
        password: &str,
        address: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SET_MINING_ACCOUNT)
                .arg(account)
                .arg(password)
                .arg(address),
        )
        .await
    }

    /// `number` limits how many blocks are mined before stopping
    pub async fn start_mining(
        &self,
        account: &str,
        password: &str,
        address: Option<&str>,
        number: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::START_MINING)
                .arg(account)
                .arg(password)
                .opt_flag("-a", address)
                .opt_flag("-n", number),
        )
        .await
    }

    pub async fn submit_work(
        &self,
        nonce: &str,
        header_hash: &str,
        mix_hash: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SUBMIT_WORK)
                .arg(nonce)
                .arg(header_hash)
                .arg(mix_hash),
        )
        .await
    }

    /// Submit a proof-of-work solution; `true` when the node accepts it
    pub async fn eth_submit_work(
        &self,
        nonce: &str,
        header_hash: &str,
        mix_hash: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::ETH_SUBMIT_WORK)
                .api(ApiVersion::V3)
                .arg(nonce)
                .arg(header_hash)
                .arg(mix_hash),
        )
        .await
    }

    pub async fn eth_get_work(&self) -> RpcClientResult<CallOutcome<Work>> {
        self.invoke(
            CallDeclaration::new(methods::ETH_GET_WORK)
                .api(ApiVersion::V3)
                .project(|result| {
                    let parts = strings(methods::ETH_GET_WORK, "result", result)?;
                    let [header_hash, seed_hash, boundary]: [String; 3] =
                        parts.try_into().map_err(|parts: Vec<String>| {
                            RpcClientError::projection(
                                methods::ETH_GET_WORK,
                                format!("expected 3 elements, got {}", parts.len()),
                            )
                        })?;

                    Ok(Work {
                        header_hash,
                        seed_hash,
                        boundary,
                    })
                }),
        )
        .await
    }
}
