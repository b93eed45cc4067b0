//! Observer that renders monitor events as `tracing` log lines.

use tracing::{error, info, warn};

use crate::domain::{Delta, MonitorEvent, StopReason, NATIVE_DECIMALS};
use crate::port::MonitorObserver;

/// Logs every monitor event with structured fields.
///
/// Amounts are rendered in whole tokens using `decimals`; balance checks
/// use native (18 decimal) units.
#[derive(Debug, Clone)]
pub struct LogObserver {
    asset: String,
    decimals: u32,
}

impl LogObserver {
    pub fn new(asset: impl Into<String>, decimals: u32) -> Self {
        Self {
            asset: asset.into(),
            decimals,
        }
    }
}

impl MonitorObserver for LogObserver {
    fn on_event(&self, event: &MonitorEvent) {
        let d = self.decimals;
        match event {
            MonitorEvent::ReadingTaken {
                iteration,
                reading,
                delta,
                streak,
            } => {
                let capacity = reading.capacity.display(d);
                match delta {
                    Some(Delta::Decrease(cut)) => warn!(
                        iteration,
                        target = %reading.target,
                        capacity = %capacity,
                        asset = %self.asset,
                        cut = %cut.display(d),
                        available = reading.available,
                        "Capacity cut"
                    ),
                    Some(Delta::Increase(added)) => info!(
                        iteration,
                        target = %reading.target,
                        capacity = %capacity,
                        asset = %self.asset,
                        added = %added.display(d),
                        available = reading.available,
                        consecutive_available = streak.consecutive_available,
                        consecutive_blocked = streak.consecutive_blocked,
                        "Capacity reading"
                    ),
                    _ => info!(
                        iteration,
                        target = %reading.target,
                        capacity = %capacity,
                        asset = %self.asset,
                        available = reading.available,
                        consecutive_available = streak.consecutive_available,
                        consecutive_blocked = streak.consecutive_blocked,
                        "Capacity reading"
                    ),
                }
            }
            MonitorEvent::ReadFailed {
                iteration,
                target,
                error,
                consecutive_failures,
            } => {
                warn!(
                    iteration,
                    target = %target,
                    error = %error,
                    consecutive_failures,
                    "Read failed, treating as unavailable"
                );
            }
            MonitorEvent::BalanceChecked {
                iteration,
                balance,
                minimum,
            } => {
                info!(
                    iteration,
                    balance = %balance.display(NATIVE_DECIMALS),
                    minimum = %minimum.display(NATIVE_DECIMALS),
                    "Gas balance checked"
                );
            }
            MonitorEvent::BalanceCheckFailed { iteration, error } => {
                warn!(iteration, error = %error, "Gas balance check failed");
            }
            MonitorEvent::TriggerAttempted {
                iteration,
                attempt,
                recipient,
                amount,
            } => {
                info!(
                    iteration,
                    attempt,
                    recipient = %recipient,
                    amount = %amount.display(d),
                    asset = %self.asset,
                    "Threshold reached, submitting transaction"
                );
            }
            MonitorEvent::TriggerResult {
                iteration,
                attempt,
                outcome,
                successes,
                failures,
            } => {
                if outcome.success {
                    info!(
                        iteration,
                        attempt,
                        tx_hash = outcome.tx_hash.as_deref().unwrap_or_default(),
                        successes,
                        failures,
                        "Transaction confirmed"
                    );
                } else {
                    error!(
                        iteration,
                        attempt,
                        error = outcome.error.as_deref().unwrap_or_default(),
                        successes,
                        failures,
                        "Transaction failed"
                    );
                }
            }
            MonitorEvent::FatalStop { iteration, reason } => match reason {
                StopReason::SafetyFloorBreached { balance, minimum } => {
                    error!(
                        iteration,
                        balance = %balance.display(NATIVE_DECIMALS),
                        minimum = %minimum.display(NATIVE_DECIMALS),
                        "Gas balance below safety floor, stopping"
                    );
                }
            },
        }
    }
}
