//! Native gas balance reader for the safety floor.

use alloy_primitives::Address;
use alloy_provider::{Provider, ProviderBuilder};
use async_trait::async_trait;

use super::rpc::{to_amount, RpcEndpoint};
use crate::domain::Amount;
use crate::error::{Error, Result};
use crate::port::BalanceReader;

/// Reads the wallet's native balance in wei.
#[derive(Debug, Clone)]
pub struct NativeBalanceReader {
    rpc: RpcEndpoint,
    owner: Address,
}

impl NativeBalanceReader {
    pub fn new(rpc: RpcEndpoint, owner: Address) -> Self {
        Self { rpc, owner }
    }
}

#[async_trait]
impl BalanceReader for NativeBalanceReader {
    async fn balance(&self) -> Result<Amount> {
        let provider = ProviderBuilder::new().connect_http(self.rpc.url());
        let balance = provider
            .get_balance(self.owner)
            .await
            .map_err(|e| Error::Read(format!("Failed to get gas balance: {e}")))?;
        to_amount(balance)
    }

    fn asset(&self) -> &'static str {
        "ETH"
    }
}
