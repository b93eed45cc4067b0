//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! monitoring logic: configuration loading, logging setup and wiring of
//! chain adapters into the monitor.

pub mod bootstrap;
pub mod config;
