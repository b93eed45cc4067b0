//! Read-only chain query ports.

use async_trait::async_trait;

use crate::domain::{Amount, Target};
use crate::error::Result;

/// Side-effect-free query of the monitored on-chain value.
///
/// Latency is opaque to the caller; implementations must not assume
/// the monitor imposes a timeout.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Read the current value for `target` in smallest units.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be completed.
    async fn read(&self, target: &Target) -> Result<Amount>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Auxiliary balance that pays for triggered actions (usually native gas).
#[async_trait]
pub trait BalanceReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the balance cannot be read.
    async fn balance(&self) -> Result<Amount>;

    /// Asset symbol for logging.
    fn asset(&self) -> &'static str;
}
