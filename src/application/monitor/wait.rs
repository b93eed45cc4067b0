use std::time::Duration;

use crate::domain::{CapacityReading, MonitorEvent, Streak};

use super::Monitor;

/// Result of [`Monitor::wait`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    Available {
        reading: CapacityReading,
        attempts: u64,
    },
    /// Every attempt in the budget came back unavailable.
    TimedOut { attempts: u64 },
    Cancelled { attempts: u64 },
}

impl WaitOutcome {
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, WaitOutcome::Available { .. })
    }

    #[must_use]
    pub fn attempts(&self) -> u64 {
        match self {
            WaitOutcome::Available { attempts, .. }
            | WaitOutcome::TimedOut { attempts }
            | WaitOutcome::Cancelled { attempts } => *attempts,
        }
    }

    /// `1` only when the budget ran out; an interrupted wait exits cleanly.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            WaitOutcome::TimedOut { .. } => 1,
            WaitOutcome::Available { .. } | WaitOutcome::Cancelled { .. } => 0,
        }
    }
}

/// Number of readings that fit in `max_wait`: `ceil(max_wait / interval)`,
/// at least one.
#[must_use]
pub fn attempt_budget(max_wait: Option<Duration>, interval: Duration) -> u64 {
    let Some(max_wait) = max_wait else {
        return u64::MAX;
    };
    let interval_ms = interval.as_millis().max(1);
    let attempts = max_wait.as_millis().div_ceil(interval_ms).max(1);
    u64::try_from(attempts).unwrap_or(u64::MAX)
}

impl Monitor {
    /// Poll until a reading is available or the wait budget is spent.
    pub async fn wait(&mut self) -> WaitOutcome {
        let budget = attempt_budget(self.config.max_wait, self.config.interval);
        let mut streak = Streak::default();

        for attempt in 1..=budget {
            if self.shutdown.is_triggered() {
                return WaitOutcome::Cancelled {
                    attempts: attempt - 1,
                };
            }

            match self.poll(attempt).await {
                Some(reading) => {
                    streak.record(reading.available);
                    self.emit(MonitorEvent::ReadingTaken {
                        iteration: attempt,
                        reading: reading.clone(),
                        delta: None,
                        streak,
                    });
                    if reading.available {
                        return WaitOutcome::Available {
                            reading,
                            attempts: attempt,
                        };
                    }
                }
                None => streak.record(false),
            }

            if attempt < budget && !self.shutdown.sleep(self.config.interval).await {
                return WaitOutcome::Cancelled { attempts: attempt };
            }
        }

        WaitOutcome::TimedOut { attempts: budget }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_rounds_up() {
        let budget = attempt_budget(
            Some(Duration::from_secs(25)),
            Duration::from_secs(10),
        );
        assert_eq!(budget, 3);
    }

    #[test]
    fn budget_is_at_least_one() {
        assert_eq!(attempt_budget(Some(Duration::ZERO), Duration::from_secs(10)), 1);
    }

    #[test]
    fn minutes_budget() {
        let budget = attempt_budget(
            Some(Duration::from_secs(30 * 60)),
            Duration::from_secs(10),
        );
        assert_eq!(budget, 180);
    }

    #[test]
    fn unbounded_without_max_wait() {
        assert_eq!(attempt_budget(None, Duration::from_secs(10)), u64::MAX);
    }
}
