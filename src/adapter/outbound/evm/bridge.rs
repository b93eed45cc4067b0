//! Bridge withdrawal executor.

use alloy_primitives::Address;
use alloy_provider::network::EthereumWallet;
use alloy_provider::ProviderBuilder;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::info;

use super::contracts::IBridge;
use super::rpc::{confirm, parse_address, to_u256, RpcEndpoint};
use crate::domain::{Amount, Recipient, TxReceipt};
use crate::error::{ExecutionError, Result};
use crate::port::TransactionExecutor;

/// Signs and submits `withdraw(recipient, amount)` on the bridge.
pub struct BridgeWithdrawExecutor {
    rpc: RpcEndpoint,
    bridge: Address,
    signer: PrivateKeySigner,
}

impl BridgeWithdrawExecutor {
    pub fn new(rpc: RpcEndpoint, bridge: Address, signer: PrivateKeySigner) -> Self {
        Self { rpc, bridge, signer }
    }

    /// Address the withdrawals are sent from.
    #[must_use]
    pub fn wallet_address(&self) -> Address {
        self.signer.address()
    }
}

#[async_trait]
impl TransactionExecutor for BridgeWithdrawExecutor {
    async fn execute(&self, recipient: &Recipient, amount: Amount) -> Result<TxReceipt> {
        let to = parse_address("recipient", recipient.as_str())?;

        info!(
            from = %self.signer.address(),
            to = %to,
            amount = %amount,
            "Submitting bridge withdrawal"
        );

        let wallet = EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new().wallet(wallet).connect_http(self.rpc.url());
        let bridge = IBridge::new(self.bridge, &provider);

        let pending = bridge
            .withdraw(to, to_u256(amount))
            .send()
            .await
            .map_err(|e| ExecutionError::SubmissionFailed(format!("Failed to send withdrawal: {e}")))?;

        confirm(pending).await
    }

    fn name(&self) -> &'static str {
        "bridge-withdraw"
    }
}
