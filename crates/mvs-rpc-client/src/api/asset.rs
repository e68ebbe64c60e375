//! Asset creation, issue, transfer and certificates

use serde_json::Value;

use crate::call::{CallDeclaration, CallOutcome};
use crate::client::RpcClient;
use crate::error::RpcClientResult;
use crate::methods;

/// Locally staged asset definition for `createasset`
#[derive(Debug, Clone, Default)]
pub struct NewAsset {
    pub symbol: String,
    pub volume: u64,
    pub issuer: String,
    pub description: Option<String>,
    pub decimal_number: Option<u32>,
    /// Secondary issue threshold rate
    pub rate: Option<i64>,
}

impl RpcClient {
    /// One asset by symbol, or every asset on chain when `symbol` is `None`
    pub async fn get_asset(
        &self,
        symbol: Option<&str>,
        cert: bool,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::GET_ASSET)
                .arg_if_some(symbol)
                .switch("--cert", cert),
        )
        .await
    }

    pub async fn get_address_asset(
        &self,
        address: &str,
        cert: bool,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::GET_ADDRESS_ASSET)
                .arg(address)
                .switch("--cert", cert),
        )
        .await
    }

    pub async fn get_account_asset(
        &self,
        account: &str,
        password: &str,
        symbol: Option<&str>,
        cert: bool,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::GET_ACCOUNT_ASSET)
                .arg(account)
                .arg(password)
                .arg_if_some(symbol)
                .switch("--cert", cert),
        )
        .await
    }

    pub async fn create_asset(
        &self,
        account: &str,
        password: &str,
        asset: &NewAsset,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::CREATE_ASSET)
                .arg(account)
                .arg(password)
                .flag("--symbol", asset.symbol.as_str())
                .flag("--volume", asset.volume)
                .opt_flag("--description", asset.description.as_deref())
                .flag("--issuer", asset.issuer.as_str())
                .opt_flag("--decimalnumber", asset.decimal_number)
                .opt_flag("--rate", asset.rate),
        )
        .await
    }

    pub async fn delete_local_asset(
        &self,
        account: &str,
        password: &str,
        symbol: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DELETE_LOCAL_ASSET)
                .arg(account)
                .arg(password)
                .flag("--symbol", symbol),
        )
        .await
    }

    /// Issue a locally created asset; `model` is the attenuation model
    pub async fn issue_asset(
        &self,
        account: &str,
        password: &str,
        symbol: &str,
        fee: Option<u64>,
        model: Option<&str>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::ISSUE)
                .arg(account)
                .arg(password)
                .arg(symbol)
                .opt_flag("--fee", fee)
                .opt_flag("--model", model),
        )
        .await
    }

    /// The node takes the source address before the symbol here
    pub async fn issue_asset_from(
        &self,
        account: &str,
        password: &str,
        symbol: &str,
        from: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::ISSUE_FROM)
                .arg(account)
                .arg(password)
                .arg(from)
                .arg(symbol),
        )
        .await
    }

    /// Assets of one account, or of the whole chain without credentials
    pub async fn list_assets(
        &self,
        account: Option<&str>,
        password: Option<&str>,
        cert: bool,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::LIST_ASSETS)
                .arg_if_some(account)
                .arg_if_some(password)
                .switch("--cert", cert),
        )
        .await
    }

    pub async fn send_asset(
        &self,
        account: &str,
        password: &str,
        to: &str,
        symbol: &str,
        amount: u64,
        fee: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SEND_ASSET)
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
    pub async fn send_asset_from(
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
            CallDeclaration::new(methods::SEND_ASSET_FROM)
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

    pub async fn burn(
        &self,
        account: &str,
        password: &str,
        symbol: &str,
        amount: u64,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::BURN)
                .arg(account)
                .arg(password)
                .arg(symbol)
                .arg(amount),
        )
        .await
    }

    /// `cert_type` is the certificate type name, e.g. `NAMING`
    pub async fn issue_cert(
        &self,
        account: &str,
        password: &str,
        to_did: &str,
        symbol: &str,
        cert_type: &str,
        fee: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::ISSUE_CERT)
                .arg(account)
                .arg(password)
                .arg(to_did)
                .arg(symbol)
                .arg(cert_type)
                .opt_flag("--fee", fee),
        )
        .await
    }

    /// `cert_type` is one of `ISSUE`, `DOMAIN` or `NAMING`
    pub async fn transfer_cert(
        &self,
        account: &str,
        password: &str,
        to_did: &str,
        cert_symbol: &str,
        cert_type: &str,
        fee: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::TRANSFER_CERT)
                .arg(account)
                .arg(password)
                .arg(to_did)
                .arg(cert_symbol)
                .arg(cert_type)
                .opt_flag("-f", fee),
        )
        .await
    }

    /// Issue more of an existing asset to `to_did`
    #[allow(clippy::too_many_arguments)]
    pub async fn secondary_issue(
        &self,
        account: &str,
        password: &str,
        to_did: &str,
        symbol: &str,
        volume: u64,
        model: Option<&str>,
        fee: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SECONDARY_ISSUE)
                .arg(account)
                .arg(password)
                .arg(to_did)
                .arg(symbol)
                .arg(volume)
                .opt_flag("-m", model)
                .opt_flag("-f", fee),
        )
        .await
    }
}
