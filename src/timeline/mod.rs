//! Effective timeline inference for tracker projects.
//!
//! Projects pulled from a project-tracking service often carry incomplete
//! schedules. This module decides which start and end date to display for each
//! project, forecasting completion from issue throughput when the tracker has
//! no target date, and packages the result as flat Gantt rows. It follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure inference functions in [`engine`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Report orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
