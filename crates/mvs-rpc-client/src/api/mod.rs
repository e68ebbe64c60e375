//! Typed wrappers, one per node method.
//!
//! Every wrapper is a method on [`RpcClient`](crate::RpcClient) that fills in a
//! [`CallDeclaration`](crate::CallDeclaration) and hands it to
//! [`RpcClient::invoke`](crate::RpcClient::invoke). Method names, positional
//! order and flag spellings are dictated by the node.

use serde_json::Value;

pub mod account;
pub mod asset;
pub mod chain;
pub mod did;
pub mod mining;
pub mod multisig;
pub(crate) mod projection;
pub mod transfer;

pub use account::KeyfileSource;
pub use asset::NewAsset;
pub use chain::{BlockHeaderSummary, BlockRef, ChainInfo};
pub use mining::Work;
pub use multisig::NewMultisig;
pub use transfer::{ChangeOptions, RawTxOptions, SendOptions, TxFilter};

/// Render `address:amount` receiver arguments in caller order
pub(crate) fn render_receivers<S: AsRef<str>>(receivers: &[(S, u64)]) -> Vec<Value> {
    receivers
        .iter()
        .map(|(address, amount)| Value::String(format!("{}:{}", address.as_ref(), amount)))
        .collect()
}
