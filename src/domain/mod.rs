//! Chain-agnostic domain types for threshold monitoring.

mod amount;
mod event;
mod ids;
mod reading;
mod receipt;

pub use amount::{Amount, AmountError, Delta, CAPACITY_DECIMALS, NATIVE_DECIMALS};
pub use event::{MonitorEvent, StopReason};
pub use ids::{Recipient, Target};
pub use reading::{is_available, CapacityReading, Streak};
pub use receipt::{TriggerOutcome, TxReceipt};
