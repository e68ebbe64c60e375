//! # MVS JSON-RPC envelope
//!
//! Transport-agnostic JSON-RPC 2.0 types for talking to an MVS node.
//!
//! The node's RPC methods mirror its command line, so every request carries a
//! single flat `params` array: positional arguments first, then `flag, value`
//! pairs for whichever options are set. This crate builds those envelopes,
//! assigns their ids and decodes the replies.
//!
//! ```rust
//! use mvs_json_rpc::{EnvelopeBuilder, OptionalArgs};
//! use serde_json::json;
//!
//! let builder = EnvelopeBuilder::new();
//! let optional = OptionalArgs::new()
//!     .optional("-f", None::<u64>)
//!     .scalar("-m", "memo");
//! let envelope = builder.build("send", vec![json!("acct"), json!("pw")], &optional);
//!
//! assert_eq!(envelope.id, 1);
//! assert_eq!(envelope.params, vec![json!("acct"), json!("pw"), json!("-m"), json!("memo")]);
//! ```

pub mod error;
pub mod params;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

pub use error::{ResponseError, RpcErrorObject};
pub use params::{ArgValue, OptionalArgs, build_params};
pub use request::{EnvelopeBuilder, RequestEnvelope};
pub use response::{ResponseOutcome, RpcResponse};
pub use types::{JsonRpcVersion, RequestId};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";
