//! Settings loading: TOML file, then environment overrides.
//!
//! # Example
//!
//! ```no_run
//! use bridgewatch::infrastructure::config::Settings;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load(None)?;
//!     settings.logging.init();
//!     Ok(())
//! }
//! ```

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::logging::LoggingConfig;
use super::wallet::WalletConfig;
use crate::domain::{Amount, CAPACITY_DECIMALS, NATIVE_DECIMALS};
use crate::error::{ConfigError, Result};

/// Endpoint id monitored when none is given.
pub const DEFAULT_TARGET: &str = "30101";

/// All configurable values before per-mode validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub network: NetworkSettings,
    #[serde(default)]
    pub bridge: BridgeSettings,
    #[serde(default)]
    pub safety: SafetySettings,
    #[serde(default)]
    pub sweep: SweepSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(skip)]
    pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkSettings {
    pub rpc_url: Option<String>,
}

/// Bridge capacity monitoring and withdrawal settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeSettings {
    /// Bridge / rate-limiter contract address.
    pub address: Option<String>,
    /// Default endpoint id.
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_max_wait_minutes")]
    pub max_wait_minutes: u64,
    /// Decimal token amount; scaled by 10^8.
    pub threshold: Option<Decimal>,
    pub recipient: Option<String>,
}

/// Gas balance safety floor for auto-trigger and sweep.
#[derive(Debug, Clone, Deserialize)]
pub struct SafetySettings {
    /// Native units (e.g. ETH).
    #[serde(default = "default_min_gas_balance")]
    pub min_gas_balance: Decimal,
    #[serde(default = "default_check_every")]
    pub check_every: u64,
}

/// ERC-20 auto-sweep settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepSettings {
    pub token: Option<String>,
    pub deposit_address: Option<String>,
    /// Decimal token amount; scaled by the token's own decimals.
    pub min_balance: Option<Decimal>,
    #[serde(default = "default_sweep_interval_secs")]
    pub interval_secs: u64,
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

const fn default_interval_secs() -> u64 {
    10
}

const fn default_max_wait_minutes() -> u64 {
    30
}

fn default_min_gas_balance() -> Decimal {
    dec!(0.005)
}

const fn default_check_every() -> u64 {
    10
}

const fn default_sweep_interval_secs() -> u64 {
    30
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            address: None,
            target: default_target(),
            interval_secs: default_interval_secs(),
            max_wait_minutes: default_max_wait_minutes(),
            threshold: None,
            recipient: None,
        }
    }
}

impl Default for SafetySettings {
    fn default() -> Self {
        Self {
            min_gas_balance: default_min_gas_balance(),
            check_every: default_check_every(),
        }
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            token: None,
            deposit_address: None,
            min_balance: None,
            interval_secs: default_sweep_interval_secs(),
        }
    }
}

/// Look up `key`, ignoring blank values.
fn lookup(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    env(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Look up and parse `key`, naming it in the error.
fn lookup_parsed<T>(env: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    lookup(env, key)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| {
                ConfigError::InvalidValue {
                    field: key,
                    reason: e.to_string(),
                }
                .into()
            })
        })
        .transpose()
}

fn scale(field: &'static str, value: Decimal, decimals: u32) -> Result<Amount> {
    Amount::from_decimal(value, decimals).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

fn required<'a>(value: Option<&'a String>, field: &'static str) -> Result<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingField { field }.into())
}

impl Settings {
    /// Load from an optional TOML file and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// environment value is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = path
            .map(std::fs::read_to_string)
            .transpose()
            .map_err(ConfigError::ReadFile)?;
        Self::from_sources(content.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build from TOML text (if any) and an environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or environment values.
    pub fn from_sources(
        toml_content: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut settings: Self = match toml_content {
            Some(content) => toml::from_str(content).map_err(ConfigError::Parse)?,
            None => Self::default(),
        };
        settings.apply_env(&env)?;
        settings.validate()?;
        Ok(settings)
    }

    fn apply_env(&mut self, env: &impl Fn(&str) -> Option<String>) -> Result<()> {
        // Never from the config file.
        self.wallet.private_key = lookup(env, "WALLET_PRIVATE_KEY");

        if let Some(v) = lookup(env, "RPC_URL") {
            self.network.rpc_url = Some(v);
        }
        if let Some(v) = lookup(env, "BRIDGE_ADDRESS") {
            self.bridge.address = Some(v);
        }
        if let Some(v) = lookup(env, "TARGET_EID") {
            self.bridge.target = v;
        }
        if let Some(v) = lookup_parsed(env, "POLL_INTERVAL_SECS")? {
            self.bridge.interval_secs = v;
        }
        if let Some(v) = lookup_parsed(env, "MAX_WAIT_MINUTES")? {
            self.bridge.max_wait_minutes = v;
        }
        if let Some(v) = lookup_parsed(env, "THRESHOLD")? {
            self.bridge.threshold = Some(v);
        }
        if let Some(v) = lookup(env, "RECIPIENT_ADDRESS") {
            self.bridge.recipient = Some(v);
        }
        if let Some(v) = lookup_parsed(env, "MIN_GAS_BALANCE")? {
            self.safety.min_gas_balance = v;
        }
        if let Some(v) = lookup_parsed(env, "BALANCE_CHECK_EVERY")? {
            self.safety.check_every = v;
        }
        if let Some(v) = lookup(env, "TOKEN_ADDRESS") {
            self.sweep.token = Some(v);
        }
        if let Some(v) = lookup(env, "DEPOSIT_ADDRESS") {
            self.sweep.deposit_address = Some(v);
        }
        if let Some(v) = lookup_parsed(env, "SWEEP_MIN_BALANCE")? {
            self.sweep.min_balance = Some(v);
        }
        if let Some(v) = lookup_parsed(env, "SWEEP_INTERVAL_SECS")? {
            self.sweep.interval_secs = v;
        }
        if let Some(v) = lookup(env, "LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup(env, "LOG_FORMAT") {
            self.logging.format = v;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.bridge.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "POLL_INTERVAL_SECS",
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }
        if self.sweep.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "SWEEP_INTERVAL_SECS",
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }
        if self.safety.check_every == 0 {
            return Err(ConfigError::InvalidValue {
                field: "BALANCE_CHECK_EVERY",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "LOG_FORMAT",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    // --- required values ---

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `RPC_URL` is unset.
    pub fn rpc_url(&self) -> Result<&str> {
        required(self.network.rpc_url.as_ref(), "RPC_URL")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `BRIDGE_ADDRESS` is unset.
    pub fn bridge_address(&self) -> Result<&str> {
        required(self.bridge.address.as_ref(), "BRIDGE_ADDRESS")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `WALLET_PRIVATE_KEY` is unset.
    pub fn private_key(&self) -> Result<&str> {
        required(self.wallet.private_key.as_ref(), "WALLET_PRIVATE_KEY")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `RECIPIENT_ADDRESS` is unset.
    pub fn recipient(&self) -> Result<&str> {
        required(self.bridge.recipient.as_ref(), "RECIPIENT_ADDRESS")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `TOKEN_ADDRESS` is unset.
    pub fn token_address(&self) -> Result<&str> {
        required(self.sweep.token.as_ref(), "TOKEN_ADDRESS")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `DEPOSIT_ADDRESS` is unset.
    pub fn deposit_address(&self) -> Result<&str> {
        required(self.sweep.deposit_address.as_ref(), "DEPOSIT_ADDRESS")
    }

    // --- scaled amounts ---

    /// Configured threshold in 8-decimal capacity units, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or too precise.
    pub fn threshold(&self) -> Result<Option<Amount>> {
        self.bridge
            .threshold
            .map(|t| scale("THRESHOLD", t, CAPACITY_DECIMALS))
            .transpose()
    }

    /// # Errors
    ///
    /// Returns an error if the threshold is unset or invalid.
    pub fn require_threshold(&self) -> Result<Amount> {
        self.threshold()?
            .ok_or_else(|| ConfigError::MissingField { field: "THRESHOLD" }.into())
    }

    /// Safety floor in wei.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or too precise.
    pub fn min_gas_balance(&self) -> Result<Amount> {
        scale("MIN_GAS_BALANCE", self.safety.min_gas_balance, NATIVE_DECIMALS)
    }

    /// Sweep minimum scaled by the token's decimals.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is unset, negative or too precise.
    pub fn sweep_min_balance(&self, decimals: u32) -> Result<Amount> {
        let value = self
            .sweep
            .min_balance
            .ok_or(ConfigError::MissingField {
                field: "SWEEP_MIN_BALANCE",
            })?;
        scale("SWEEP_MIN_BALANCE", value, decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_any_source() {
        let settings = Settings::from_sources(None, env(&[])).unwrap();
        assert_eq!(settings.bridge.target, DEFAULT_TARGET);
        assert_eq!(settings.bridge.interval_secs, 10);
        assert_eq!(settings.bridge.max_wait_minutes, 30);
        assert_eq!(settings.safety.min_gas_balance, dec!(0.005));
        assert_eq!(settings.safety.check_every, 10);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.wallet.private_key.is_none());
    }

    #[test]
    fn env_overrides_file() {
        let toml = r#"
            [network]
            rpc_url = "https://file.example"

            [bridge]
            interval_secs = 60
            threshold = 1000
        "#;
        let settings = Settings::from_sources(
            Some(toml),
            env(&[("RPC_URL", "https://env.example"), ("THRESHOLD", "2000")]),
        )
        .unwrap();

        assert_eq!(settings.rpc_url().unwrap(), "https://env.example");
        assert_eq!(settings.bridge.interval_secs, 60);
        assert_eq!(
            settings.require_threshold().unwrap(),
            Amount::from_units(200_000_000_000)
        );
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let settings =
            Settings::from_sources(None, env(&[("RPC_URL", "  "), ("WALLET_PRIVATE_KEY", "")]))
                .unwrap();
        assert!(settings.rpc_url().is_err());
        assert!(settings.private_key().is_err());
    }

    #[test]
    fn missing_values_name_the_variable() {
        let settings = Settings::from_sources(None, env(&[])).unwrap();
        for (result, field) in [
            (settings.rpc_url().map(drop), "RPC_URL"),
            (settings.bridge_address().map(drop), "BRIDGE_ADDRESS"),
            (settings.private_key().map(drop), "WALLET_PRIVATE_KEY"),
            (settings.recipient().map(drop), "RECIPIENT_ADDRESS"),
            (settings.require_threshold().map(drop), "THRESHOLD"),
            (settings.token_address().map(drop), "TOKEN_ADDRESS"),
            (settings.deposit_address().map(drop), "DEPOSIT_ADDRESS"),
            (settings.sweep_min_balance(6).map(drop), "SWEEP_MIN_BALANCE"),
        ] {
            match result {
                Err(Error::Config(ConfigError::MissingField { field: f })) => assert_eq!(f, field),
                other => panic!("Expected MissingField {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_env_value_is_invalid() {
        let err = Settings::from_sources(None, env(&[("POLL_INTERVAL_SECS", "ten")])).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "POLL_INTERVAL_SECS",
                ..
            })
        ));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = Settings::from_sources(None, env(&[("POLL_INTERVAL_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("POLL_INTERVAL_SECS"));
    }

    #[test]
    fn over_precise_threshold_is_rejected() {
        let settings =
            Settings::from_sources(None, env(&[("THRESHOLD", "0.000000001")])).unwrap();
        let err = settings.threshold().unwrap_err();
        assert!(err.to_string().contains("THRESHOLD"));
    }

    #[test]
    fn gas_floor_in_wei() {
        let settings = Settings::from_sources(None, env(&[("MIN_GAS_BALANCE", "0.01")])).unwrap();
        assert_eq!(
            settings.min_gas_balance().unwrap(),
            Amount::from_units(10_000_000_000_000_000)
        );
    }

    #[test]
    fn sweep_minimum_uses_token_decimals() {
        let settings =
            Settings::from_sources(None, env(&[("SWEEP_MIN_BALANCE", "25.5")])).unwrap();
        assert_eq!(
            settings.sweep_min_balance(6).unwrap(),
            Amount::from_units(25_500_000)
        );
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = Settings::from_sources(None, env(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(err.to_string().contains("LOG_FORMAT"));
    }

    #[test]
    fn private_key_is_never_read_from_file() {
        let toml = r#"
            [wallet]
            private_key = "0xdeadbeef"
        "#;
        let settings = Settings::from_sources(Some(toml), env(&[])).unwrap();
        assert!(settings.wallet.private_key.is_none());
    }
}
