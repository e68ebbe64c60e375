//! # MVS RPC Client Prelude
//!
//! Convenient re-exports of the types most tests need.
//!
//! ```rust
//! use mvs_rpc_client::prelude::*;
//! ```

// Core client types
pub use crate::call::{CallDeclaration, CallOutcome};
pub use crate::client::{RpcClient, RpcClientBuilder};
pub use crate::config::ClientConfig;
pub use crate::error::{RpcClientError, RpcClientResult};

// Endpoint argument types
pub use crate::api::{
    BlockHeaderSummary, BlockRef, ChainInfo, ChangeOptions, KeyfileSource, NewAsset, NewMultisig,
    RawTxOptions, SendOptions, TxFilter, Work,
};

// Transport types
pub use crate::transport::{ApiVersion, Transport};

// Envelope types
pub use mvs_json_rpc::{ArgValue, OptionalArgs, RpcErrorObject};
