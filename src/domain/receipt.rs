//! Results of triggered transactions.

use serde::Serialize;

/// Confirmation data for a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxReceipt {
    /// Transaction hash on the chain.
    pub tx_hash: String,
    /// Block the transaction was included in, when the node reports it.
    pub block_number: Option<u64>,
}

impl TxReceipt {
    pub fn new(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            block_number: None,
        }
    }
}

/// Result of one triggering attempt. Logged, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerOutcome {
    pub success: bool,
    pub tx_hash: Option<String>,
    pub error: Option<String>,
}

impl TriggerOutcome {
    #[must_use]
    pub fn succeeded(receipt: &TxReceipt) -> Self {
        Self {
            success: true,
            tx_hash: Some(receipt.tx_hash.clone()),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            tx_hash: None,
            error: Some(error.to_string()),
        }
    }
}
