//! ETP transfers, transaction history and raw transactions

use serde_json::Value;

use crate::api::render_receivers;
use crate::call::{CallDeclaration, CallOutcome};
use crate::client::RpcClient;
use crate::error::RpcClientResult;
use crate::methods;

/// Fee (`-f`) and memo (`-m`) shared by the single-receiver sends
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub fee: Option<u64>,
    pub memo: Option<String>,
}

/// Fee (`-f`) and change address (`-m`) for the multi-receiver sends
#[derive(Debug, Clone, Default)]
pub struct ChangeOptions {
    pub fee: Option<u64>,
    pub change: Option<String>,
}

/// Filters for `listtxs`
#[derive(Debug, Clone, Default)]
pub struct TxFilter {
    pub address: Option<String>,
    /// Half-open height range `[start, end)`
    pub height: Option<(u64, u64)>,
    pub index: Option<u64>,
    pub limit: Option<u64>,
    pub symbol: Option<String>,
}

/// Optional parts of `createrawtx`
#[derive(Debug, Clone, Default)]
pub struct RawTxOptions {
    /// Deposit period in days (7, 30, 90, 182 or 365)
    pub deposit: Option<u32>,
    pub fee: Option<u64>,
    pub message: Option<String>,
    pub change: Option<String>,
    /// Asset name; leave unset for an ETP transaction
    pub symbol: Option<String>,
}

impl RpcClient {
    /// `remark` is only understood by `send`
    pub async fn send(
        &self,
        account: &str,
        password: &str,
        to: &str,
        amount: u64,
        options: &SendOptions,
        remark: Option<&str>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SEND)
                .arg(account)
                .arg(password)
                .arg(to)
                .arg(amount)
                .opt_flag("-f", options.fee)
                .opt_flag("-m", options.memo.as_deref())
                .opt_flag("-r", remark),
        )
        .await
    }

    pub async fn send_from(
        &self,
        account: &str,
        password: &str,
        from: &str,
        to: &str,
        amount: u64,
        options: &SendOptions,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SEND_FROM)
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

    /// Pay several receivers at once; each is sent as `-r address:amount`
    pub async fn send_more<S: AsRef<str>>(
        &self,
        account: &str,
        password: &str,
        receivers: &[(S, u64)],
        options: &ChangeOptions,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SEND_MORE)
                .arg(account)
                .arg(password)
                .opt_flag("-f", options.fee)
                .opt_flag("-m", options.change.as_deref())
                .repeated_flag("-r", render_receivers(receivers)),
        )
        .await
    }

    pub async fn list_txs(
        &self,
        account: &str,
        password: &str,
        filter: &TxFilter,
    ) -> RpcClientResult<CallOutcome<Value>> {
        let height = filter
            .height
            .map(|(start, end)| format!("{}:{}", start, end));

        self.invoke(
            CallDeclaration::new(methods::LIST_TXS)
                .arg(account)
                .arg(password)
                .opt_flag("-a", filter.address.as_deref())
                .opt_flag("-e", height)
                .opt_flag("-i", filter.index)
                .opt_flag("-l", filter.limit)
                .opt_flag("-s", filter.symbol.as_deref()),
        )
        .await
    }

    /// Build an unsigned transaction.
    ///
    /// `tx_type` is 0 for an ETP transfer, 1 for an ETP deposit and 3 for an
    /// asset transfer.
    pub async fn create_raw_tx<S: AsRef<str>>(
        &self,
        receivers: &[(S, u64)],
        senders: &[&str],
        tx_type: u32,
        options: &RawTxOptions,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::CREATE_RAW_TX)
                .repeated_flag("-r", render_receivers(receivers))
                .repeated_flag("-s", senders.iter().copied())
                .flag("-t", tx_type)
                .opt_flag("-d", options.deposit)
                .opt_flag("-f", options.fee)
                .opt_flag("-i", options.message.as_deref())
                .opt_flag("-m", options.change.as_deref())
                .opt_flag("-n", options.symbol.as_deref()),
        )
        .await
    }

    pub async fn sign_raw_tx(
        &self,
        account: &str,
        password: &str,
        transaction: &str,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SIGN_RAW_TX)
                .arg(account)
                .arg(password)
                .arg(transaction),
        )
        .await
    }

    pub async fn decode_raw_tx(&self, transaction: &str) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(CallDeclaration::new(methods::DECODE_RAW_TX).arg(transaction))
            .await
    }

    /// Broadcast a signed Base16 transaction
    pub async fn send_raw_tx(
        &self,
        transaction: &str,
        fee: Option<u64>,
    ) -> RpcClientResult<CallOutcome<Value>> {
        self.invoke(
            CallDeclaration::new(methods::SEND_RAW_TX)
                .arg(transaction)
                .opt_flag("-f", fee),
        )
        .await
    }
}
