//! Shared test utilities for the MVS RPC client
//!
//! Provides an in-process mock node and tracing setup used by the integration
//! tests.

pub mod mock_node;

pub use mock_node::{MockNode, MockReply, RecordedRequest};

/// Install a `RUST_LOG`-driven subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
