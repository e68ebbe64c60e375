//! Digital identities and sends addressed by DID

use serde_json::Value;

use crate::api::render_receivers;
use crate::api::transfer::{ChangeOptions, SendOptions};
use crate::call::{CallDeclaration, CallOutcome};
use crate::client::RpcClient;
use crate::error::RpcClientResult;
use crate::methods;

impl RpcClient {
    /// Register `did_symbol` and bind it to `address`
    pub async fn issue_did(
        &self,
        account: &str,
        password: &str,
        address: &str,
        did_symbol: &str,
        fee: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::ISSUE_DID)
                .arg(account)
                .arg(password)
                .arg(address)
                .arg(did_symbol)
                .opt_flag("--fee", fee),
        )
        .await
    }

    /// Without credentials the node lists every DID on chain.
    ///
    /// Both positions are always sent; a missing credential goes out as `null`.
    pub async fn list_dids(
        &self,
        account: Option<&str>,
        password: Option<&str>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::LIST_DIDS)
                .arg(account)
                .arg(password),
        )
        .await
    }

    /// Rebind `did_symbol` to `to_address`
    pub async fn modify_did(
        &self,
        account: &str,
        password: &str,
        to_address: &str,
        did_symbol: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DID_MODIFY_ADDRESS)
                .arg(account)
                .arg(password)
                .arg(to_address)
                .arg(did_symbol),
        )
        .await
    }

    pub async fn list_did_addresses(
        &self,
        account: &str,
        password: &str,
        did_symbol: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::LIST_DID_ADDRESSES)
                .arg(account)
                .arg(password)
                .arg(did_symbol),
        )
        .await
    }

    /// `to` may be a DID or an address
    pub async fn did_send(
        &self,
        account: &str,
        password: &str,
        to: &str,
        amount: u64,
        options: &SendOptions,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DID_SEND)
                .arg(account)
                .arg(password)
                .arg(to)
                .arg(amount)
                .opt_flag("-f", options.fee)
                .opt_flag("-m", options.memo.as_deref()),
        )
        .await
    }

    pub async fn did_send_more<S: AsRef<str>>(
        &self,
        account: &str,
        password: &str,
        receivers: &[(S, u64)],
        options: &ChangeOptions,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DID_SEND_MORE)
                .arg(account)
                .arg(password)
                .opt_flag("-f", options.fee)
                .opt_flag("-m", options.change.as_deref())
                .repeated_flag("-r", render_receivers(receivers)),
        )
        .await
    }

    pub async fn did_send_from(
        &self,
        account: &str,
        password: &str,
        from: &str,
        to: &str,
        amount: u64,
        options: &SendOptions,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DID_SEND_FROM)
                .arg(account)
                .arg(password)
                .arg(from)
                .arg(to)
                .arg(amount)
                .opt_flag("-f", options.fee)
                .opt_flag("-m", options.memo.as_deref()),
        )
        .await
    }

    pub async fn did_send_asset(
        &self,
        account: &str,
        password: &str,
        to: &str,
        symbol: &str,
        amount: u64,
        fee: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DID_SEND_ASSET)
                .arg(account)
                .arg(password)
                .arg(to)
                .arg(symbol)
                .arg(amount)
                .opt_flag("--fee", fee),
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn did_send_asset_from(
        &self,
        account: &str,
        password: &str,
        from: &str,
        to: &str,
        symbol: &str,
        amount: u64,
        fee: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DID_SEND_ASSET_FROM)
                .arg(account)
                .arg(password)
                .arg(from)
                .arg(to)
                .arg(symbol)
                .arg(amount)
                .opt_flag("--fee", fee),
        )
        .await
    }
}
