//! Bridgewatch - bridge rate-limit capacity monitor.
//!
//! Polls a bridge contract's outbound rate limit for a destination endpoint
//! and, once the available capacity reaches a threshold, submits a
//! withdrawal to a fixed recipient. The same loop sweeps an ERC-20 balance
//! to an exchange deposit address once it reaches a minimum.
//!
//! # Architecture
//!
//! The crate follows a layered (hexagonal) layout:
//!
//! - [`domain`] - exact amounts, readings, streaks, receipts and loop events
//! - [`port`] - traits the loop talks through: readers, executor, observer
//! - [`application`] - the monitor loop (check / wait / monitor / auto-trigger)
//!   and its shutdown signal
//! - [`adapter`] - the CLI, a tracing observer and alloy-backed EVM adapters
//! - [`infrastructure`] - settings, logging and runtime wiring
//! - [`error`] - error types for the crate
//!
//! # Features
//!
//! - `evm` (default) - chain access through alloy
//! - `testkit` - scripted collaborators for driving the loop in tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use bridgewatch::adapter::outbound::log::LogObserver;
//! use bridgewatch::application::{Monitor, MonitorConfig};
//! use bridgewatch::port::ChainReader;
//!
//! async fn once(reader: Arc<dyn ChainReader>) -> bool {
//!     let config = MonitorConfig::new("30101", Duration::from_secs(10));
//!     let observer = Arc::new(LogObserver::new("capacity", 8));
//!     Monitor::new(config, reader, observer).check().await.available
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
