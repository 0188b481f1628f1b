//! Port contracts for timeline reporting.
//!
//! Ports define infrastructure-agnostic interfaces used by the report
//! service.

pub mod project_source;

pub use project_source::{ProjectSource, ProjectSourceError, ProjectSourceResult};
