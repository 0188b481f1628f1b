//! Step definitions for timeline inference BDD scenarios.

pub mod given;
pub mod then;
