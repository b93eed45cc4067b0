//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The monitor loop talks to the outside world exclusively through these
//! traits, so the same loop drives live EVM adapters and the scripted
//! collaborators used in tests.
//!
//! ```text
//!                 ┌──────────────────────┐
//!                 │       Monitor        │
//!                 └──────────────────────┘
//!        │              │               │              │
//!        ▼              ▼               ▼              ▼
//!  ┌───────────┐ ┌─────────────┐ ┌────────────┐ ┌────────────┐
//!  │  Chain    │ │  Balance    │ │Transaction │ │  Monitor   │
//!  │  Reader   │ │  Reader     │ │ Executor   │ │  Observer  │
//!  └───────────┘ └─────────────┘ └────────────┘ └────────────┘
//! ```
//!
//! - [`ChainReader`] - side-effect-free read of the monitored value
//! - [`BalanceReader`] - auxiliary balance used by the safety floor
//! - [`TransactionExecutor`] - build, sign, submit and confirm a transfer
//! - [`MonitorObserver`] - sink for structured loop events

mod executor;
mod observer;
mod reader;

pub use executor::TransactionExecutor;
pub use observer::MonitorObserver;
pub use reader::{BalanceReader, ChainReader};
