//! Linear Gantt: effective project timelines for tracker dashboards.
//!
//! This crate decides which start and end date a tracker project should be
//! drawn with on a Gantt chart when its explicit schedule is partially or
//! fully missing, including a velocity-based completion forecast derived from
//! the throughput of the project's issues.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Plain project, issue and output records
//! - **Engine**: Pure inference functions with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for fetching tracker data
//! - **Adapters**: Concrete implementations of ports (in-memory, snapshots)
//! - **Services**: Report orchestration over a port and a clock
//!
//! # Modules
//!
//! - [`timeline`]: Effective date inference and timeline reporting

pub mod timeline;
