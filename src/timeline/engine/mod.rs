//! Pure effective-timeline inference.
//!
//! Every function here is a pure function of a project, its issues and, for
//! overdue checks, an explicit reference date. Nothing reads the wall clock
//! or keeps state between calls, so callers may evaluate many projects
//! concurrently.

mod config;
mod forecast;
mod projection;
mod start;

pub use config::EngineConfig;
pub use forecast::{
    CompletionForecaster, EndBasis, EndEstimate, VelocityForecast, infer_effective_end,
    velocity_forecast,
};
pub use projection::GanttProjector;
pub use start::infer_effective_start;
