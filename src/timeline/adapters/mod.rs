//! Adapter implementations for timeline ports.

pub mod memory;
pub mod snapshot;
