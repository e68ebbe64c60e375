//! # JSON-RPC Envelope Prelude
//!
//! ```rust
//! use mvs_json_rpc::prelude::*;
//! ```

pub use crate::error::{ResponseError, RpcErrorObject};
pub use crate::params::{ArgValue, OptionalArgs};
pub use crate::request::{EnvelopeBuilder, RequestEnvelope};
pub use crate::response::{ResponseOutcome, RpcResponse};
pub use crate::types::{JsonRpcVersion, RequestId};
