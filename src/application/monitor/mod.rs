//! Threshold monitor loop.
//!
//! One sequential loop shared by every mode: read, compare against the
//! threshold, optionally act, sleep. Each iteration completes before the
//! next begins, so at most one triggered action is ever in flight.
//!
//! | Mode | Method | Ends when |
//! |------|--------|-----------|
//! | check | [`Monitor::check`] | after one reading |
//! | wait | [`Monitor::wait`] | available, budget spent, or shutdown |
//! | monitor | [`Monitor::monitor`] | shutdown |
//! | auto-trigger | [`Monitor::auto_trigger`] | safety floor breached or shutdown |

mod check;
mod trigger;
mod wait;
mod watch;


pub use trigger::{SafetyFloor, TriggerAmount, TriggerPlan, TriggerStats};
pub use wait::WaitOutcome;

use std::sync::Arc;
use std::time::Duration;

use crate::application::shutdown::Shutdown;
use crate::domain::{Amount, CapacityReading, MonitorEvent, Recipient, StopReason, Target};
use crate::port::{ChainReader, MonitorObserver};

/// Immutable loop configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// What the reader queries (endpoint id or holder address).
    pub target: Target,
    /// Delay between the end of one iteration and the start of the next.
    pub interval: Duration,
    /// Minimum value, in smallest units, that counts as available.
    pub threshold: Option<Amount>,
    /// Budget for `wait` mode.
    pub max_wait: Option<Duration>,
    /// Destination of triggered transfers.
    pub recipient: Option<Recipient>,
}

impl MonitorConfig {
    pub fn new(target: impl Into<Target>, interval: Duration) -> Self {
        Self {
            target: target.into(),
            interval,
            threshold: None,
            max_wait: None,
            recipient: None,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: Amount) -> Self {
        self.threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    #[must_use]
    pub fn with_recipient(mut self, recipient: Recipient) -> Self {
        self.recipient = Some(recipient);
        self
    }
}

/// How an unbounded loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopExit {
    /// Shutdown was signalled.
    Cancelled { iterations: u64 },
    /// The loop stopped itself.
    Stopped { iterations: u64, reason: StopReason },
}

impl LoopExit {
    #[must_use]
    pub fn iterations(&self) -> u64 {
        match self {
            LoopExit::Cancelled { iterations } | LoopExit::Stopped { iterations, .. } => {
                *iterations
            }
        }
    }

    /// Both endings are clean: a safety-floor stop is deliberate.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// Drives a [`ChainReader`] according to a [`MonitorConfig`].
pub struct Monitor {
    config: MonitorConfig,
    reader: Arc<dyn ChainReader>,
    observer: Arc<dyn MonitorObserver>,
    shutdown: Shutdown,
    consecutive_failures: u64,
}

impl Monitor {
    pub fn new(
        config: MonitorConfig,
        reader: Arc<dyn ChainReader>,
        observer: Arc<dyn MonitorObserver>,
    ) -> Self {
        Self {
            config,
            reader,
            observer,
            shutdown: Shutdown::never(),
            consecutive_failures: 0,
        }
    }

    /// Stop the loop when `shutdown` fires.
    #[must_use]
    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = shutdown;
        self
    }

    fn emit(&self, event: MonitorEvent) {
        self.observer.on_event(&event);
    }

    /// Take one reading. A failed read is reported and yields `None`;
    /// callers treat it as an unavailable zero reading.
    async fn poll(&mut self, iteration: u64) -> Option<CapacityReading> {
        match self.reader.read(&self.config.target).await {
            Ok(capacity) => {
                self.consecutive_failures = 0;
                Some(CapacityReading::new(
                    self.config.target.clone(),
                    capacity,
                    self.config.threshold,
                ))
            }
            Err(e) => {
                self.consecutive_failures += 1;
                self.emit(MonitorEvent::ReadFailed {
                    iteration,
                    target: self.config.target.clone(),
                    error: e.to_string(),
                    consecutive_failures: self.consecutive_failures,
                });
                None
            }
        }
    }
}
