//! Account, address and key management

use serde_json::Value;

use crate::api::projection::{field_number, field_str, field_strings};
use crate::call::{CallDeclaration, CallOutcome};
use crate::client::RpcClient;
use crate::error::RpcClientResult;
use crate::methods;

/// Where `importkeyfile` reads the key file from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyfileSource<'a> {
    /// Path on the node's filesystem
    Path(&'a str),
    /// Key file body sent inline
    Content(&'a str),
}

impl RpcClient {
    pub async fn dump_keyfile(
        &self,
        account: &str,
        password: &str,
        lastword: &str,
        keyfile: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DUMP_KEYFILE)
                .arg(account)
                .arg(password)
                .arg(lastword)
                .arg(keyfile),
        )
        .await
    }

    /// Inline content goes fourth, after an ignored path placeholder
    pub async fn import_keyfile(
        &self,
        account: &str,
        password: &str,
        source: KeyfileSource<'_>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        let declaration = CallDeclaration::new(methods::IMPORT_KEYFILE)
            .arg(account)
            .arg(password);

        let declaration = match source {
            KeyfileSource::Path(path) => declaration.arg(path),
            KeyfileSource::Content(content) => declaration.arg("omitted").arg(content),
        };

        self.invoke(declaration).await
    }

    /// Create an account; returns its mnemonic words
    pub async fn new_account(
        &self,
        account: &str,
        password: &str,
    ) -> RpcClientResult<CallOutcome<Vec<String>>> {
        self.invoke(
            CallDeclaration::new(methods::GET_NEW_ACCOUNT)
                .arg(account)
                .arg(password)
                .project(|mut result| {
                    let mnemonic = field_str(methods::GET_NEW_ACCOUNT, &mut result, "mnemonic")?;
                    Ok(mnemonic.split_whitespace().map(str::to_string).collect())
                }),
        )
        .await
    }

    /// Mnemonic key and number of addresses
    pub async fn get_account(
        &self,
        account: &str,
        password: &str,
        lastword: &str,
    ) -> RpcClientResult<CallOutcome<(String, u64)>> {
        self.invoke(
            CallDeclaration::new(methods::GET_ACCOUNT)
                .arg(account)
                .arg(password)
                .arg(lastword)
                .project(|mut result| {
                    Ok((
                        field_str(methods::GET_ACCOUNT, &mut result, "mnemonic-key")?,
                        field_number(methods::GET_ACCOUNT, &mut result, "address-count")?,
                    ))
                }),
        )
        .await
    }

    pub async fn new_address(
        &self,
        account: &str,
        password: &str,
        count: u32,
    ) -> RpcClientResult<CallOutcome<Vec<String>>> {
        self.invoke(
            CallDeclaration::new(methods::GET_NEW_ADDRESS)
                .arg(account)
                .arg(password)
                .flag("--number", count)
                .project(|mut result| {
                    field_strings(methods::GET_NEW_ADDRESS, &mut result, "addresses")
                }),
        )
        .await
    }

    pub async fn list_addresses(
        &self,
        account: &str,
        password: &str,
    ) -> RpcClientResult<CallOutcome<Vec<String>>> {
        self.invoke(
            CallDeclaration::new(methods::LIST_ADDRESSES)
                .arg(account)
                .arg(password)
                .project(|mut result| {
                    field_strings(methods::LIST_ADDRESSES, &mut result, "addresses")
                }),
        )
        .await
    }

    pub async fn validate_address(&self, address: &str) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(CallDeclaration::new(methods::VALIDATE_ADDRESS).arg(address))
            .await
    }

    pub async fn delete_account(
        &self,
        account: &str,
        password: &str,
        lastword: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::DELETE_ACCOUNT)
                .arg(account)
                .arg(password)
                .arg(lastword),
        )
        .await
    }

    /// Restore an account from its mnemonic
    pub async fn import_account(
        &self,
        account: &str,
        password: &str,
        mnemonic: &str,
        hd_index: Option<u32>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::IMPORT_ACCOUNT)
                .arg(mnemonic)
                .flag("--accountname", account)
                .flag("--password", password)
                .opt_flag("--hd_index", hd_index),
        )
        .await
    }

    pub async fn change_passwd(
        &self,
        account: &str,
        password: &str,
        new_password: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::CHANGE_PASSWD)
                .arg(account)
                .arg(password)
                .flag("--password", new_password),
        )
        .await
    }

    pub async fn get_public_key(
        &self,
        account: &str,
        password: &str,
        address: &str,
    ) -> RpcClientResult<CallOutcome<String>> {
        self.invoke(
            CallDeclaration::new(methods::GET_PUBLIC_KEY)
                .arg(account)
                .arg(password)
                .arg(address)
                .project(|mut result| {
                    field_str(methods::GET_PUBLIC_KEY, &mut result, "public-key")
                }),
        )
        .await
    }

    /// Total balance details of the account
    pub async fn get_balance(
        &self,
        account: &str,
        password: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::GET_BALANCE)
                .arg(account)
                .arg(password),
        )
        .await
    }

    /// Balances between `range.0` (`-g`) and `range.1` (`-l`)
    pub async fn list_balances(
        &self,
        account: &str,
        password: &str,
        range: (u64, u64),
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::LIST_BALANCES)
                .arg(account)
                .arg(password)
                .flag("-g", range.0)
                .flag("-l", range.1),
        )
        .await
    }
}
