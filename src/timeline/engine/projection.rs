//! Assembly of Gantt rows from projects and their issues.

use super::{CompletionForecaster, EngineConfig, infer_effective_start};
use crate::timeline::domain::{
    CanonicalStatus, GanttRow, IssueRecord, IssueTally, ProjectRecord, Progress,
};
use chrono::NaiveDate;

/// Packages effective dates into [`GanttRow`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GanttProjector {
    forecaster: CompletionForecaster,
}

impl GanttProjector {
    /// Creates a projector with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self {
            forecaster: CompletionForecaster::new(config),
        }
    }

    /// Returns the forecaster used for end dates.
    #[must_use]
    pub const fn forecaster(&self) -> &CompletionForecaster {
        &self.forecaster
    }

    /// Projects one project into a row.
    ///
    /// `today` must be captured once per batch by the caller so every row in
    /// a report agrees on what is overdue. Rows are returned even when a date
    /// is unresolved; excluding them is the caller's decision.
    #[must_use]
    pub fn project(
        &self,
        project: &ProjectRecord,
        issues: &[IssueRecord],
        progress: Progress,
        today: NaiveDate,
    ) -> GanttRow {
        let status = project.status();
        let start = infer_effective_start(project, issues);
        let end = self
            .forecaster
            .estimate_end_with_start(project, issues, start)
            .map(|estimate| estimate.date);
        let tally = IssueTally::from_issues(issues);

        GanttRow {
            id: project.id().clone(),
            name: project.name().to_owned(),
            start,
            end,
            progress,
            status,
            color: project.color().map(str::to_owned),
            lead: project.lead().map(str::to_owned),
            description: project.description().map(str::to_owned),
            is_overdue: is_overdue(end, status, today),
            issue_count: tally.issue_count(),
            completed_issue_count: tally.completed_issue_count(),
        }
    }

    /// Projects a row, deriving progress from the issue tally.
    #[must_use]
    pub fn project_with_tally(
        &self,
        project: &ProjectRecord,
        issues: &[IssueRecord],
        today: NaiveDate,
    ) -> GanttRow {
        let progress = IssueTally::from_issues(issues).progress(project.reported_progress());
        self.project(project, issues, progress, today)
    }
}

fn is_overdue(end: Option<NaiveDate>, status: CanonicalStatus, today: NaiveDate) -> bool {
    status != CanonicalStatus::Done && end.is_some_and(|date| date < today)
}
