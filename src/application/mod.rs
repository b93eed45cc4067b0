//! Application layer: the monitor loop and its cancellation signal.
//!
//! Depends on `domain` and `port` only; adapters are injected.

pub mod monitor;
pub mod shutdown;

pub use monitor::{
    LoopExit, Monitor, MonitorConfig, SafetyFloor, TriggerAmount, TriggerPlan, TriggerStats,
    WaitOutcome,
};
pub use shutdown::{Shutdown, ShutdownTrigger};
