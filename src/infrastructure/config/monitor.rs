//! Per-mode monitor configuration built from [`Settings`].
//!
//! Each builder checks exactly what its mode needs, so `check` works with
//! nothing but an RPC URL and a bridge address while `trigger` refuses to
//! start without a threshold and a recipient.

use std::time::Duration;

use super::settings::Settings;
use crate::application::MonitorConfig;
use crate::domain::{Recipient, Target};
use crate::error::{ConfigError, Result};

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ModeOverrides {
    pub target: Option<String>,
    pub interval_secs: Option<u64>,
    pub max_wait_minutes: Option<u64>,
}

impl Settings {
    fn target_or_default(&self, overrides: &ModeOverrides) -> Target {
        Target::new(
            overrides
                .target
                .clone()
                .unwrap_or_else(|| self.bridge.target.clone()),
        )
    }

    /// Zero from the environment is rejected during loading; this catches
    /// a zero passed on the command line.
    fn interval(&self, overrides: &ModeOverrides, default_secs: u64) -> Result<Duration> {
        match overrides.interval_secs.unwrap_or(default_secs) {
            0 => Err(ConfigError::InvalidValue {
                field: "interval",
                reason: "must be at least 1 second".to_string(),
            }
            .into()),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    fn max_wait(&self, overrides: &ModeOverrides) -> Result<Duration> {
        let minutes = overrides
            .max_wait_minutes
            .unwrap_or(self.bridge.max_wait_minutes);
        minutes
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                ConfigError::InvalidValue {
                    field: "MAX_WAIT_MINUTES",
                    reason: format!("{minutes} minutes is too large"),
                }
                .into()
            })
    }

    /// Configuration for `check`, `wait` and `monitor`.
    ///
    /// The threshold is optional here; without one, any positive capacity
    /// counts as available.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured threshold is invalid, the interval
    /// is zero or the wait budget does not fit in seconds.
    pub fn read_only_config(&self, overrides: &ModeOverrides) -> Result<MonitorConfig> {
        let mut config = MonitorConfig::new(
            self.target_or_default(overrides),
            self.interval(overrides, self.bridge.interval_secs)?,
        )
        .with_max_wait(self.max_wait(overrides)?);
        if let Some(threshold) = self.threshold()? {
            config = config.with_threshold(threshold);
        }
        Ok(config)
    }

    /// Configuration for bridge auto-trigger.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold or recipient is missing, or the
    /// interval is zero.
    pub fn trigger_config(&self, overrides: &ModeOverrides) -> Result<MonitorConfig> {
        let threshold = self.require_threshold()?;
        let recipient = Recipient::new(self.recipient()?);
        Ok(MonitorConfig::new(
            self.target_or_default(overrides),
            self.interval(overrides, self.bridge.interval_secs)?,
        )
        .with_threshold(threshold)
        .with_recipient(recipient))
    }

    /// Configuration for the ERC-20 sweep: the target is the holding
    /// wallet and the threshold is the minimum balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the deposit address or minimum balance is
    /// missing or invalid.
    pub fn sweep_config(
        &self,
        holder: impl Into<Target>,
        token_decimals: u32,
        overrides: &ModeOverrides,
    ) -> Result<MonitorConfig> {
        let minimum = self.sweep_min_balance(token_decimals)?;
        let deposit = Recipient::new(self.deposit_address()?);
        Ok(MonitorConfig::new(
            holder,
            self.interval(overrides, self.sweep.interval_secs)?,
        )
        .with_threshold(minimum)
        .with_recipient(deposit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Settings::from_sources(None, move |key: &str| {
            pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    #[test]
    fn read_only_uses_defaults() {
        let config = settings(&[])
            .read_only_config(&ModeOverrides::default())
            .unwrap();
        assert_eq!(config.target, Target::from("30101"));
        assert_eq!(config.interval, Duration::from_secs(10));
        assert_eq!(config.max_wait, Some(Duration::from_secs(1800)));
        assert!(config.threshold.is_none());
    }

    #[test]
    fn cli_overrides_win() {
        let overrides = ModeOverrides {
            target: Some("30184".into()),
            interval_secs: Some(3),
            max_wait_minutes: Some(2),
        };
        let config = settings(&[("TARGET_EID", "30110")])
            .read_only_config(&overrides)
            .unwrap();
        assert_eq!(config.target, Target::from("30184"));
        assert_eq!(config.interval, Duration::from_secs(3));
        assert_eq!(config.max_wait, Some(Duration::from_secs(120)));
    }

    #[test]
    fn oversized_wait_budget_is_rejected() {
        let overrides = ModeOverrides {
            max_wait_minutes: Some(u64::MAX),
            ..ModeOverrides::default()
        };
        let err = settings(&[]).read_only_config(&overrides).unwrap_err();
        assert!(err.to_string().contains("MAX_WAIT_MINUTES"));

        let huge = u64::MAX.to_string();
        let err = settings(&[("MAX_WAIT_MINUTES", huge.as_str())])
            .read_only_config(&ModeOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("MAX_WAIT_MINUTES"));
    }

    #[test]
    fn zero_cli_interval_is_rejected() {
        let overrides = ModeOverrides {
            interval_secs: Some(0),
            ..ModeOverrides::default()
        };
        let err = settings(&[]).read_only_config(&overrides).unwrap_err();
        assert!(err.to_string().contains("interval"));

        let err = settings(&[("THRESHOLD", "2000"), ("RECIPIENT_ADDRESS", "0xabc")])
            .trigger_config(&overrides)
            .unwrap_err();
        assert!(err.to_string().contains("at least 1 second"));

        let err = settings(&[
            ("SWEEP_MIN_BALANCE", "100"),
            ("DEPOSIT_ADDRESS", "0xdeposit"),
        ])
        .sweep_config("0xholder", 6, &overrides)
        .unwrap_err();
        assert!(err.to_string().contains("interval"));
    }

    #[test]
    fn trigger_requires_threshold_and_recipient() {
        let err = settings(&[("RECIPIENT_ADDRESS", "0xabc")])
            .trigger_config(&ModeOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("THRESHOLD"));

        let err = settings(&[("THRESHOLD", "2000")])
            .trigger_config(&ModeOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("RECIPIENT_ADDRESS"));
    }

    #[test]
    fn trigger_config_scales_threshold() {
        let config = settings(&[("THRESHOLD", "2000"), ("RECIPIENT_ADDRESS", "0xabc")])
            .trigger_config(&ModeOverrides::default())
            .unwrap();
        assert_eq!(config.threshold, Some(Amount::from_units(200_000_000_000)));
        assert_eq!(config.recipient, Some(Recipient::from("0xabc")));
    }

    #[test]
    fn sweep_config_targets_holder() {
        let config = settings(&[
            ("SWEEP_MIN_BALANCE", "100"),
            ("DEPOSIT_ADDRESS", "0xdeposit"),
        ])
        .sweep_config("0xholder", 6, &ModeOverrides::default())
        .unwrap();
        assert_eq!(config.target, Target::from("0xholder"));
        assert_eq!(config.threshold, Some(Amount::from_units(100_000_000)));
        assert_eq!(config.interval, Duration::from_secs(30));
    }
}
