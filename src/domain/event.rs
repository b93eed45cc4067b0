//! Structured events emitted by the monitor loop.

use serde::Serialize;

use super::{Amount, CapacityReading, Delta, Recipient, Streak, Target, TriggerOutcome};

/// Why a loop stopped for good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The auxiliary balance fell below the safety floor.
    SafetyFloorBreached { balance: Amount, minimum: Amount },
}

/// Everything the loop reports to its observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MonitorEvent {
    ReadingTaken {
        iteration: u64,
        reading: CapacityReading,
        /// Change against the previous successful reading (monitor mode only).
        delta: Option<Delta>,
        streak: Streak,
    },
    ReadFailed {
        iteration: u64,
        target: Target,
        error: String,
        consecutive_failures: u64,
    },
    BalanceChecked {
        iteration: u64,
        balance: Amount,
        minimum: Amount,
    },
    BalanceCheckFailed {
        iteration: u64,
        error: String,
    },
    TriggerAttempted {
        iteration: u64,
        attempt: u64,
        recipient: Recipient,
        amount: Amount,
    },
    TriggerResult {
        iteration: u64,
        attempt: u64,
        outcome: TriggerOutcome,
        successes: u64,
        failures: u64,
    },
    FatalStop {
        iteration: u64,
        reason: StopReason,
    },
}
