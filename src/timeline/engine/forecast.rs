//! Effective end date inference and velocity forecasting.

use super::{EngineConfig, infer_effective_start};
use crate::timeline::domain::{CanonicalStatus, IssueRecord, IssueStage, ProjectRecord};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// How an effective end date was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndBasis {
    /// The project's own target date.
    Explicit,
    /// Projected from completed-issue throughput.
    Velocity,
    /// Effective start plus the configured fallback horizon.
    Horizon,
}

/// An effective end date together with its basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndEstimate {
    /// The inferred end date.
    pub date: NaiveDate,
    /// Which rule produced the date.
    pub basis: EndBasis,
}

/// Throughput measured over a project's completed issues.
///
/// Only issues in the completed stage with both a start and a completion
/// timestamp are measured. Every other issue, whatever its stage, counts as
/// remaining work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VelocityForecast {
    span_start: NaiveDate,
    span_end: NaiveDate,
    span_days: u64,
    completed_count: u64,
    remaining_count: u64,
}

impl VelocityForecast {
    /// Earliest start date among measured issues.
    #[must_use]
    pub const fn span_start(&self) -> NaiveDate {
        self.span_start
    }

    /// Latest completion date among measured issues.
    #[must_use]
    pub const fn span_end(&self) -> NaiveDate {
        self.span_end
    }

    /// Whole days between [`Self::span_start`] and [`Self::span_end`].
    /// Always positive.
    #[must_use]
    pub const fn span_days(&self) -> u64 {
        self.span_days
    }

    /// Number of measured issues. Always positive.
    #[must_use]
    pub const fn completed_count(&self) -> u64 {
        self.completed_count
    }

    /// Number of issues not measured as completed.
    #[must_use]
    pub const fn remaining_count(&self) -> u64 {
        self.remaining_count
    }

    /// Days needed to finish the remaining issues at the measured velocity.
    ///
    /// Equals `ceil(remaining / (completed / span_days))`, evaluated in exact
    /// integer arithmetic. A partially-remaining day rounds up.
    #[must_use]
    pub const fn estimated_days(&self) -> u64 {
        self.remaining_count
            .saturating_mul(self.span_days)
            .div_ceil(self.completed_count)
    }

    /// Date the remaining work is projected to finish on.
    ///
    /// With nothing remaining this is the span end. Returns `None` only if the
    /// projection overflows the calendar.
    #[must_use]
    pub fn projected_end(&self) -> Option<NaiveDate> {
        self.span_end
            .checked_add_days(Days::new(self.estimated_days()))
    }
}

/// Measures issue throughput for a velocity forecast.
///
/// Returns `None` when no issue is measurable or when the measured span is
/// not at least one day long.
#[must_use]
pub fn velocity_forecast(issues: &[IssueRecord]) -> Option<VelocityForecast> {
    let measured: Vec<(NaiveDate, NaiveDate)> = issues
        .iter()
        .filter(|issue| issue.stage() == IssueStage::Completed)
        .filter_map(|issue| Some((issue.started_on()?, issue.completed_on()?)))
        .collect();

    let span_start = measured.iter().map(|(started, _)| *started).min()?;
    let span_end = measured.iter().map(|(_, completed)| *completed).max()?;
    let span_days = u64::try_from((span_end - span_start).num_days())
        .ok()
        .filter(|days| *days > 0)?;

    let completed_count = count_as_u64(measured.len());
    let remaining_count = count_as_u64(issues.len()).saturating_sub(completed_count);

    Some(VelocityForecast {
        span_start,
        span_end,
        span_days,
        completed_count,
        remaining_count,
    })
}

/// Infers a project's end date with the default configuration.
///
/// `start` is the project's effective start as computed by
/// [`infer_effective_start`]; it is only consulted when neither a target date
/// nor a velocity forecast is available.
#[must_use]
pub fn infer_effective_end(
    project: &ProjectRecord,
    issues: &[IssueRecord],
    start: Option<NaiveDate>,
) -> Option<NaiveDate> {
    CompletionForecaster::default()
        .estimate_end_with_start(project, issues, start)
        .map(|estimate| estimate.date)
}

/// Computes effective end dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionForecaster {
    config: EngineConfig,
}

impl CompletionForecaster {
    /// Creates a forecaster with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the forecaster configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Infers a project's effective end date.
    #[must_use]
    pub fn effective_end(&self, project: &ProjectRecord, issues: &[IssueRecord]) -> Option<NaiveDate> {
        self.estimate_end(project, issues).map(|estimate| estimate.date)
    }

    /// Infers a project's effective end date and how it was obtained.
    ///
    /// The effective start is only derived when the horizon fallback is
    /// reached.
    #[must_use]
    pub fn estimate_end(&self, project: &ProjectRecord, issues: &[IssueRecord]) -> Option<EndEstimate> {
        self.estimate(project, issues, || infer_effective_start(project, issues))
    }

    /// Infers a project's effective end date from an already known start.
    #[must_use]
    pub fn estimate_end_with_start(
        &self,
        project: &ProjectRecord,
        issues: &[IssueRecord],
        start: Option<NaiveDate>,
    ) -> Option<EndEstimate> {
        self.estimate(project, issues, || start)
    }

    fn estimate(
        &self,
        project: &ProjectRecord,
        issues: &[IssueRecord],
        start: impl FnOnce() -> Option<NaiveDate>,
    ) -> Option<EndEstimate> {
        if let Some(target) = project.explicit_target_date() {
            return Some(EndEstimate {
                date: target,
                basis: EndBasis::Explicit,
            });
        }

        if project.status() == CanonicalStatus::InProgress {
            let projected = velocity_forecast(issues).and_then(|forecast| forecast.projected_end());
            if let Some(date) = projected {
                return Some(EndEstimate {
                    date,
                    basis: EndBasis::Velocity,
                });
            }
        }

        start()
            .and_then(|date| date.checked_add_days(self.config.fallback_horizon()))
            .map(|date| EndEstimate {
                date,
                basis: EndBasis::Horizon,
            })
    }
}

fn count_as_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
