//! ERC-20 balance reader and transfer executor used by sweeps.

use alloy_primitives::Address;
use alloy_provider::network::EthereumWallet;
use alloy_provider::ProviderBuilder;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::info;

use super::contracts::IERC20;
use super::rpc::{confirm, parse_address, to_amount, to_u256, RpcEndpoint};
use crate::domain::{Amount, Recipient, Target, TxReceipt};
use crate::error::{Error, ExecutionError, Result};
use crate::port::{ChainReader, TransactionExecutor};

/// Reads `balanceOf(target)` on a token contract.
#[derive(Debug, Clone)]
pub struct TokenBalanceReader {
    rpc: RpcEndpoint,
    token: Address,
}

impl TokenBalanceReader {
    pub fn new(rpc: RpcEndpoint, token: Address) -> Self {
        Self { rpc, token }
    }

    /// Token decimals, used to scale configured amounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn decimals(&self) -> Result<u32> {
        let provider = ProviderBuilder::new().connect_http(self.rpc.url());
        let token = IERC20::new(self.token, &provider);
        let decimals: u8 = token
            .decimals()
            .call()
            .await
            .map_err(|e| Error::Read(format!("Failed to get decimals: {e}")))?;
        Ok(u32::from(decimals))
    }

    /// Token symbol for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn symbol(&self) -> Result<String> {
        let provider = ProviderBuilder::new().connect_http(self.rpc.url());
        let token = IERC20::new(self.token, &provider);
        token
            .symbol()
            .call()
            .await
            .map_err(|e| Error::Read(format!("Failed to get symbol: {e}")))
    }
}

#[async_trait]
impl ChainReader for TokenBalanceReader {
    async fn read(&self, target: &Target) -> Result<Amount> {
        let owner = parse_address("target", target.as_str())?;
        let provider = ProviderBuilder::new().connect_http(self.rpc.url());
        let token = IERC20::new(self.token, &provider);

        let balance = token
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| Error::Read(format!("Failed to get balance: {e}")))?;

        to_amount(balance)
    }

    fn name(&self) -> &'static str {
        "erc20-balance"
    }
}

/// Signs and submits `transfer(recipient, amount)` on a token contract.
pub struct TokenTransferExecutor {
    rpc: RpcEndpoint,
    token: Address,
    signer: PrivateKeySigner,
}

impl TokenTransferExecutor {
    pub fn new(rpc: RpcEndpoint, token: Address, signer: PrivateKeySigner) -> Self {
        Self { rpc, token, signer }
    }

    #[must_use]
    pub fn wallet_address(&self) -> Address {
        self.signer.address()
    }
}

#[async_trait]
impl TransactionExecutor for TokenTransferExecutor {
    async fn execute(&self, recipient: &Recipient, amount: Amount) -> Result<TxReceipt> {
        let to = parse_address("recipient", recipient.as_str())?;

        info!(
            from = %self.signer.address(),
            to = %to,
            amount = %amount,
            "Submitting token transfer"
        );

        let wallet = EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new().wallet(wallet).connect_http(self.rpc.url());
        let token = IERC20::new(self.token, &provider);

        let pending = token
            .transfer(to, to_u256(amount))
            .send()
            .await
            .map_err(|e| ExecutionError::SubmissionFailed(format!("Failed to send transfer: {e}")))?;

        confirm(pending).await
    }

    fn name(&self) -> &'static str {
        "erc20-transfer"
    }
}
