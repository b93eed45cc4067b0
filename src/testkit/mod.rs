//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`chain`] - Scripted [`ChainReader`](crate::port::ChainReader),
//!   [`BalanceReader`](crate::port::BalanceReader) and
//!   [`TransactionExecutor`](crate::port::TransactionExecutor) implementations.
//! - [`observer`] - [`RecordingObserver`](observer::RecordingObserver) that keeps every event.

pub mod chain;
pub mod observer;

use std::time::Duration;

use crate::application::monitor::MonitorConfig;
use crate::domain::{Amount, Recipient, CAPACITY_DECIMALS};

/// Whole tokens at capacity precision: `capacity(2000)` is `200_000_000_000` units.
#[must_use]
pub fn capacity(tokens: u128) -> Amount {
    Amount::from_units(tokens * 10u128.pow(CAPACITY_DECIMALS))
}

/// Config with a 10 second interval and a 2000 token threshold.
#[must_use]
pub fn config() -> MonitorConfig {
    MonitorConfig::new("30101", Duration::from_secs(10))
        .with_threshold(capacity(2000))
        .with_recipient(Recipient::from("0x000000000000000000000000000000000000dEaD"))
}
