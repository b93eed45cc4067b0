//! Implementations of ports (hexagonal adapters).
//!
//! - `inbound` - the command line that drives the application
//! - `outbound` - chain access and event sinks the application drives

pub mod inbound;
pub mod outbound;
