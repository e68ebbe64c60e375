//! # MVS RPC Client
//!
//! Typed JSON-RPC 2.0 client for driving an MVS node from integration tests.
//! Each node method has a thin async wrapper on [`RpcClient`] that declares its
//! method name, positional arguments, optional flags and result projector, then
//! runs through one generic [`RpcClient::invoke`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mvs_rpc_client::{CallOutcome, RpcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RpcClient::connect("http://127.0.0.1:8820/rpc/v2")?;
//!
//!     match client.get_peer_info().await? {
//!         CallOutcome::Success(peers) => println!("peers: {:?}", peers),
//!         CallOutcome::Failure(error) => println!("node said {}: {}", error.code, error.message),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Outcomes and faults
//!
//! A JSON-RPC `error` object from the node is an ordinary answer and comes back
//! as [`CallOutcome::Failure`]. Transport failures, undecodable bodies and
//! response id mismatches are faults and come back as
//! [`RpcClientError`](error::RpcClientError).
//!
//! ## Methods without a wrapper
//!
//! ```rust,no_run
//! # async fn run(client: &mvs_rpc_client::RpcClient) -> mvs_rpc_client::RpcClientResult<()> {
//! use mvs_rpc_client::{CallDeclaration, OptionalArgs};
//! use serde_json::json;
//!
//! let outcome = client
//!     .invoke(
//!         CallDeclaration::new("getmemorypool")
//!             .arg(json!("--json"))
//!             .with_optional(OptionalArgs::new().optional("-l", Some(10))),
//!     )
//!     .await?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod call;
pub mod client;
pub mod config;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod transport;

#[cfg(test)]
mod testing;

// Re-export main types
pub use call::{CallDeclaration, CallOutcome};
pub use client::{RpcClient, RpcClientBuilder};
pub use config::ClientConfig;
pub use error::{RpcClientError, RpcClientResult};

// Re-export transport types
pub use transport::{ApiVersion, HttpTransport, Transport};

// Re-export envelope types for convenience
pub use mvs_json_rpc::{ArgValue, OptionalArgs, RpcErrorObject};
