//! EVM chain adapters built on alloy.
//!
//! Each adapter holds only an RPC URL, contract addresses and (for
//! executors) a local signer; providers are built per call.

pub mod bridge;
pub mod contracts;
pub mod native;
pub mod rate_limit;
pub mod rpc;
pub mod token;

pub use bridge::BridgeWithdrawExecutor;
pub use native::NativeBalanceReader;
pub use rate_limit::RateLimitReader;
pub use rpc::{parse_address, parse_signer, RpcEndpoint};
pub use token::{TokenBalanceReader, TokenTransferExecutor};
