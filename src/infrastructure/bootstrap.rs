//! Runtime wiring: settings in, ready-to-run adapters out.
//!
//! Every address, key and endpoint id is validated here so a bad value
//! fails once at startup instead of on every poll.

use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};

use crate::adapter::outbound::log::LogObserver;
use crate::application::shutdown::{self, Shutdown};
use crate::application::SafetyFloor;
use crate::domain::{Target, CAPACITY_DECIMALS};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Settings;
use crate::port::{ChainReader, MonitorObserver, TransactionExecutor};

#[cfg(feature = "evm")]
use crate::port::BalanceReader;
#[cfg(feature = "evm")]
use crate::adapter::outbound::evm::{
    parse_address, parse_signer, BridgeWithdrawExecutor, NativeBalanceReader, RateLimitReader,
    RpcEndpoint, TokenBalanceReader, TokenTransferExecutor,
};

/// Collaborators for bridge auto-trigger.
pub struct TriggerWiring {
    pub reader: Arc<dyn ChainReader>,
    pub executor: Arc<dyn TransactionExecutor>,
    pub safety: SafetyFloor,
    pub wallet: String,
}

/// Collaborators for the ERC-20 sweep.
pub struct SweepWiring {
    pub reader: Arc<dyn ChainReader>,
    pub executor: Arc<dyn TransactionExecutor>,
    pub safety: SafetyFloor,
    /// Holding wallet; the sweep's monitored target.
    pub wallet: String,
    pub decimals: u32,
    pub symbol: String,
}

/// Observer for bridge capacity readings.
#[must_use]
pub fn capacity_observer() -> Arc<dyn MonitorObserver> {
    Arc::new(LogObserver::new("capacity", CAPACITY_DECIMALS))
}

/// Shutdown signal fired by the first Ctrl-C.
#[must_use]
pub fn shutdown_on_ctrl_c() -> Shutdown {
    let (trigger, shutdown) = shutdown::channel();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received (Ctrl+C)");
                trigger.trigger();
            }
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C"),
        }
    });
    shutdown
}

#[cfg(feature = "evm")]
pub fn capacity_reader(settings: &Settings, target: &Target) -> Result<Arc<dyn ChainReader>> {
    let rpc = RpcEndpoint::parse(settings.rpc_url()?)?;
    let bridge = parse_address("BRIDGE_ADDRESS", settings.bridge_address()?)?;
    RateLimitReader::endpoint_id(target)?;
    let reader = RateLimitReader::new(rpc, bridge);
    tracing::debug!(reader = reader.name(), target = %target, "Capacity reader ready");
    Ok(Arc::new(reader))
}

#[cfg(feature = "evm")]
pub fn bridge_trigger(settings: &Settings, target: &Target) -> Result<TriggerWiring> {
    let rpc = RpcEndpoint::parse(settings.rpc_url()?)?;
    let bridge = parse_address("BRIDGE_ADDRESS", settings.bridge_address()?)?;
    RateLimitReader::endpoint_id(target)?;
    parse_address("RECIPIENT_ADDRESS", settings.recipient()?)?;
    let signer = parse_signer(settings.private_key()?)?;

    let executor = BridgeWithdrawExecutor::new(rpc.clone(), bridge, signer);
    let wallet = executor.wallet_address();
    let gas = NativeBalanceReader::new(rpc.clone(), wallet);
    let reader = RateLimitReader::new(rpc, bridge);
    info!(
        reader = reader.name(),
        executor = executor.name(),
        gas_asset = gas.asset(),
        wallet = %wallet,
        "Bridge trigger wired"
    );
    let safety = SafetyFloor::new(
        Arc::new(gas),
        settings.min_gas_balance()?,
        settings.safety.check_every,
    );

    Ok(TriggerWiring {
        reader: Arc::new(reader),
        executor: Arc::new(executor),
        safety,
        wallet: wallet.to_string(),
    })
}

/// Reads token decimals and symbol from the chain, so this is async.
#[cfg(feature = "evm")]
pub async fn token_sweep(settings: &Settings) -> Result<SweepWiring> {
    let rpc = RpcEndpoint::parse(settings.rpc_url()?)?;
    let token = parse_address("TOKEN_ADDRESS", settings.token_address()?)?;
    parse_address("DEPOSIT_ADDRESS", settings.deposit_address()?)?;
    let signer = parse_signer(settings.private_key()?)?;
    // Scaled later, once decimals are known; checked before any network call.
    settings.sweep.min_balance.ok_or(ConfigError::MissingField {
        field: "SWEEP_MIN_BALANCE",
    })?;

    let reader = TokenBalanceReader::new(rpc.clone(), token);
    let decimals = reader.decimals().await?;
    let symbol = match reader.symbol().await {
        Ok(symbol) => symbol,
        Err(e) => {
            warn!(error = %e, "Failed to read token symbol");
            "tokens".to_string()
        }
    };

    let executor = TokenTransferExecutor::new(rpc.clone(), token, signer);
    let wallet = executor.wallet_address();
    let gas = NativeBalanceReader::new(rpc, wallet);
    info!(
        reader = reader.name(),
        executor = executor.name(),
        gas_asset = gas.asset(),
        wallet = %wallet,
        decimals,
        "Token sweep wired"
    );
    let safety = SafetyFloor::new(
        Arc::new(gas),
        settings.min_gas_balance()?,
        settings.safety.check_every,
    );

    Ok(SweepWiring {
        reader: Arc::new(reader),
        executor: Arc::new(executor),
        safety,
        wallet: wallet.to_string(),
        decimals,
        symbol,
    })
}

#[cfg(not(feature = "evm"))]
fn chain_unavailable() -> crate::error::Error {
    ConfigError::InvalidValue {
        field: "evm",
        reason: "chain access requires the evm feature".to_string(),
    }
    .into()
}

#[cfg(not(feature = "evm"))]
pub fn capacity_reader(settings: &Settings, _target: &Target) -> Result<Arc<dyn ChainReader>> {
    settings.rpc_url()?;
    settings.bridge_address()?;
    Err(chain_unavailable())
}

#[cfg(not(feature = "evm"))]
pub fn bridge_trigger(settings: &Settings, _target: &Target) -> Result<TriggerWiring> {
    settings.rpc_url()?;
    settings.bridge_address()?;
    Err(chain_unavailable())
}

#[cfg(not(feature = "evm"))]
pub async fn token_sweep(settings: &Settings) -> Result<SweepWiring> {
    settings.rpc_url()?;
    Err(chain_unavailable())
}
