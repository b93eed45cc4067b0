use std::sync::Arc;

use crate::domain::{Amount, MonitorEvent, StopReason, Streak, TriggerOutcome};
use crate::error::{ConfigError, Result};
use crate::port::{BalanceReader, TransactionExecutor};

use super::{LoopExit, Monitor};

/// How much a triggered action moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerAmount {
    /// Exactly the threshold, however much capacity was observed.
    #[default]
    Threshold,
    /// Everything the reading reported (balance sweeps).
    Observed,
}

/// Periodic check that there is still enough balance to pay for actions.
#[derive(Clone)]
pub struct SafetyFloor {
    pub reader: Arc<dyn BalanceReader>,
    pub minimum: Amount,
    /// Check on iteration 1 and every `check_every` iterations after.
    pub check_every: u64,
}

impl SafetyFloor {
    pub fn new(reader: Arc<dyn BalanceReader>, minimum: Amount, check_every: u64) -> Self {
        Self {
            reader,
            minimum,
            check_every: check_every.max(1),
        }
    }

    #[must_use]
    pub fn is_due(&self, iteration: u64) -> bool {
        iteration > 0 && (iteration - 1) % self.check_every == 0
    }
}

/// Settings specific to auto-trigger mode.
#[derive(Clone, Default)]
pub struct TriggerPlan {
    pub amount: TriggerAmount,
    pub safety: Option<SafetyFloor>,
}

/// Trigger counters, updated on every attempt regardless of outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerStats {
    pub attempts: u64,
    pub successes: u64,
    pub failures: u64,
}

impl Monitor {
    /// Poll indefinitely and execute once for every reading at or above
    /// the threshold.
    ///
    /// The outcome of an action never halts the loop; the next chance to
    /// act is the next qualifying reading. Only a safety-floor breach
    /// stops the loop from the inside.
    ///
    /// # Errors
    ///
    /// Returns an error before the first iteration if the configuration
    /// has no threshold or no recipient.
    pub async fn auto_trigger(
        &mut self,
        executor: Arc<dyn TransactionExecutor>,
        plan: TriggerPlan,
    ) -> Result<LoopExit> {
        let threshold = self
            .config
            .threshold
            .ok_or(ConfigError::MissingField { field: "threshold" })?;
        let recipient = self
            .config
            .recipient
            .clone()
            .ok_or(ConfigError::MissingField { field: "recipient" })?;

        let mut iteration = 0;
        let mut streak = Streak::default();
        let mut stats = TriggerStats::default();

        loop {
            if self.shutdown.is_triggered() {
                return Ok(LoopExit::Cancelled {
                    iterations: iteration,
                });
            }
            iteration += 1;

            if let Some(floor) = plan.safety.as_ref().filter(|f| f.is_due(iteration)) {
                match floor.reader.balance().await {
                    Ok(balance) => {
                        self.emit(MonitorEvent::BalanceChecked {
                            iteration,
                            balance,
                            minimum: floor.minimum,
                        });
                        if balance < floor.minimum {
                            let reason = StopReason::SafetyFloorBreached {
                                balance,
                                minimum: floor.minimum,
                            };
                            self.emit(MonitorEvent::FatalStop {
                                iteration,
                                reason: reason.clone(),
                            });
                            return Ok(LoopExit::Stopped {
                                iterations: iteration,
                                reason,
                            });
                        }
                    }
                    Err(e) => self.emit(MonitorEvent::BalanceCheckFailed {
                        iteration,
                        error: e.to_string(),
                    }),
                }
            }

            match self.poll(iteration).await {
                Some(reading) => {
                    streak.record(reading.available);
                    let capacity = reading.capacity;
                    self.emit(MonitorEvent::ReadingTaken {
                        iteration,
                        reading,
                        delta: None,
                        streak,
                    });

                    if capacity >= threshold {
                        let amount = match plan.amount {
                            TriggerAmount::Threshold => threshold,
                            TriggerAmount::Observed => capacity,
                        };
                        stats.attempts += 1;
                        self.emit(MonitorEvent::TriggerAttempted {
                            iteration,
                            attempt: stats.attempts,
                            recipient: recipient.clone(),
                            amount,
                        });

                        let outcome = match executor.execute(&recipient, amount).await {
                            Ok(receipt) => {
                                stats.successes += 1;
                                TriggerOutcome::succeeded(&receipt)
                            }
                            Err(e) => {
                                stats.failures += 1;
                                TriggerOutcome::failed(e)
                            }
                        };
                        self.emit(MonitorEvent::TriggerResult {
                            iteration,
                            attempt: stats.attempts,
                            outcome,
                            successes: stats.successes,
                            failures: stats.failures,
                        });
                    }
                }
                None => streak.record(false),
            }

            if !self.shutdown.sleep(self.config.interval).await {
                return Ok(LoopExit::Cancelled {
                    iterations: iteration,
                });
            }
        }
    }
}
