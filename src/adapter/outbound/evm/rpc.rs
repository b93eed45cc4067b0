//! Shared RPC, address and receipt helpers.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use alloy_provider::network::{Ethereum, ReceiptResponse};
use alloy_provider::PendingTransactionBuilder;
use alloy_signer_local::PrivateKeySigner;

use crate::domain::{Amount, TxReceipt};
use crate::error::{ConfigError, Error, ExecutionError, Result};

/// Validated JSON-RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEndpoint {
    url: url::Url,
}

impl RpcEndpoint {
    /// # Errors
    ///
    /// Returns an error if `raw` is not an absolute URL.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = raw.parse().map_err(|e: url::ParseError| ConfigError::InvalidValue {
            field: "RPC_URL",
            reason: e.to_string(),
        })?;
        Ok(Self { url })
    }

    #[must_use]
    pub fn url(&self) -> url::Url {
        self.url.clone()
    }
}

/// Parse a hex address, naming the offending setting on failure.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for malformed addresses.
pub fn parse_address(field: &'static str, value: &str) -> Result<Address> {
    Address::from_str(value.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Build a local signer from a hex private key.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if the key is malformed.
pub fn parse_signer(private_key: &str) -> Result<PrivateKeySigner> {
    PrivateKeySigner::from_str(private_key.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field: "WALLET_PRIVATE_KEY",
            reason: e.to_string(),
        }
        .into()
    })
}

/// Convert an on-chain integer into an [`Amount`].
///
/// # Errors
///
/// Returns a read error if the value exceeds 128 bits.
pub fn to_amount(value: U256) -> Result<Amount> {
    u128::try_from(value)
        .map(Amount::from_units)
        .map_err(|_| Error::Read(format!("value {value} exceeds 128 bits")))
}

#[must_use]
pub fn to_u256(amount: Amount) -> U256 {
    U256::from(amount.units())
}

/// Wait for a submitted transaction and map its receipt.
///
/// # Errors
///
/// Returns an error if the receipt cannot be fetched or the transaction
/// reverted.
pub async fn confirm(pending: PendingTransactionBuilder<Ethereum>) -> Result<TxReceipt> {
    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| ExecutionError::SubmissionFailed(format!("Failed to get receipt: {e}")))?;

    let tx_hash = format!("{:?}", ReceiptResponse::transaction_hash(&receipt));
    if !ReceiptResponse::status(&receipt) {
        return Err(ExecutionError::Reverted { tx_hash }.into());
    }

    Ok(TxReceipt {
        tx_hash,
        block_number: ReceiptResponse::block_number(&receipt),
    })
}
