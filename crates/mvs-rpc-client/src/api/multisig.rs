//! Multi-signature addresses and transactions

use serde_json::Value;

use crate::call::{CallDeclaration, CallOutcome};
use crate::client::RpcClient;
use crate::error::{RpcClientError, RpcClientResult};
use crate::methods;

/// An m-of-n multisig address shared between our key and `cosigner_keys`
#[derive(Debug, Clone)]
pub struct NewMultisig<'a> {
    pub description: &'a str,
    pub public_key: &'a str,
    pub cosigner_keys: &'a [&'a str],
    /// Signatures needed to spend (`m`)
    pub required: u32,
}

impl NewMultisig<'_> {
    /// Total number of keys (`n`), ours included
    pub fn key_count(&self) -> usize {
        self.cosigner_keys.len() + 1
    }
}

impl RpcClient {
    /// Fails with [`RpcClientError::InvalidArgument`] before sending anything if
    /// our own key is listed among the co-signers.
    pub async fn get_new_multisig(
        &self,
        account: &str,
        password: &str,
        multisig: &NewMultisig<'_>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        if multisig.cosigner_keys.contains(&multisig.public_key) {
            return Err(RpcClientError::invalid_argument(
                "own public key must not be among the co-signer keys",
            ));
        }

        self.invoke(
            CallDeclaration::new(methods::GET_NEW_MULTISIG)
                .arg(account)
                .arg(password)
                .flag("-d", multisig.description)
                .flag("-s", multisig.public_key)
                .repeated_flag("-k", multisig.cosigner_keys.iter().copied())
                .flag("-m", multisig.required)
                .flag("-n", multisig.key_count() as u64),
        )
        .await
    }

    pub async fn list_multisig(
        &self,
        account: &str,
        password: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::LIST_MULTISIG)
                .arg(account)
                .arg(password),
        )
        .await
    }

    pub async fn delete_multisig(
        &self,
        account: &str,
        password: &str,
        address: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DELETE_MULTISIG)
                .arg(account)
                .arg(password)
                .arg(address),
        )
        .await
    }

    /// Unsigned spend of `amount` ETP bits from a multisig address
    pub async fn create_multisig_tx(
        &self,
        account: &str,
        password: &str,
        from: &str,
        to: &str,
        amount: u64,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::CREATE_MULTISIG_TX)
                .arg(account)
                .arg(password)
                .arg(from)
                .arg(to)
                .arg(amount),
        )
        .await
    }

    /// Sign a Base16 transaction; `broadcast` sends it once fully signed
    pub async fn sign_multisig_tx(
        &self,
        account: &str,
        password: &str,
        tx: &str,
        broadcast: bool,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SIGN_MULTISIG_TX)
                .arg(account)
                .arg(password)
                .arg(tx)
                .switch("-b", broadcast),
        )
        .await
    }
}
