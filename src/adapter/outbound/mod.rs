//! Outbound adapters (driven side).

pub mod log;

#[cfg(feature = "evm")]
pub mod evm;
