//! State-changing transaction port.

use async_trait::async_trait;

use crate::domain::{Amount, Recipient, TxReceipt};
use crate::error::Result;

/// Executes the triggered transfer.
///
/// The call is all-or-nothing from the monitor's point of view: it
/// returns only after the network reports the transaction final or
/// failed. Submitted-but-unconfirmed is never surfaced.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Send `amount` to `recipient` and wait for the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if signing, submission or confirmation fails,
    /// or if the transaction reverted.
    async fn execute(&self, recipient: &Recipient, amount: Amount) -> Result<TxReceipt>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}
