//! Service layer that turns tracker data into a timeline report.

use super::report::{ExcludedProject, MissingDate, ReportFilter, ReportSummary, TimelineReport};
use crate::timeline::{
    domain::{GanttRow, IssueRecord, ProjectRecord},
    engine::{EngineConfig, GanttProjector},
    ports::{ProjectSource, ProjectSourceError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for report generation.
#[derive(Debug, Error)]
pub enum TimelineReportError {
    /// The project listing could not be fetched.
    #[error(transparent)]
    Source(#[from] ProjectSourceError),
}

/// Result type for report service operations.
pub type TimelineReportResult<T> = Result<T, TimelineReportError>;

/// Timeline report orchestration service.
#[derive(Clone)]
pub struct TimelineReportService<S, C>
where
    S: ProjectSource,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    clock: Arc<C>,
    projector: GanttProjector,
}

impl<S, C> TimelineReportService<S, C>
where
    S: ProjectSource,
    C: Clock + Send + Sync,
{
    /// Creates a report service with the default engine configuration.
    #[must_use]
    pub fn new(source: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(source, clock, EngineConfig::default())
    }

    /// Creates a report service with an explicit engine configuration.
    #[must_use]
    pub const fn with_config(source: Arc<S>, clock: Arc<C>, config: EngineConfig) -> Self {
        Self {
            source,
            clock,
            projector: GanttProjector::new(config),
        }
    }

    /// Builds a report dated today according to the service clock.
    ///
    /// The clock is read exactly once, so every project in the batch is
    /// judged against the same reference date.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineReportError::Source`] when the project listing
    /// fails. Failed issue fetches do not fail the report.
    pub async fn build_report(&self, filter: &ReportFilter) -> TimelineReportResult<TimelineReport> {
        let today = self.clock.utc().date_naive();
        self.build_report_as_of(filter, today).await
    }

    /// Builds a report against an explicit reference date.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineReportError::Source`] when the project listing
    /// fails.
    pub async fn build_report_as_of(
        &self,
        filter: &ReportFilter,
        today: NaiveDate,
    ) -> TimelineReportResult<TimelineReport> {
        let projects = self.source.list_projects().await?;
        tracing::debug!(
            projects = projects.len(),
            reference_date = %today,
            "building timeline report"
        );

        let mut rows = Vec::new();
        let mut excluded = Vec::new();
        for project in projects.iter().filter(|project| filter.admits_project(project)) {
            let issues = self.fetch_issues(project).await;
            let row = self.projector.project_with_tally(project, &issues, today);
            match MissingDate::of(&row) {
                None if filter.admits_row(&row) => rows.push(row),
                None => {}
                Some(missing) => {
                    tracing::debug!(
                        project_id = %row.id,
                        ?missing,
                        "excluding project without effective dates"
                    );
                    excluded.push(ExcludedProject {
                        id: row.id,
                        name: row.name,
                        missing,
                    });
                }
            }
        }

        sort_rows(&mut rows);
        let summary = ReportSummary::from_rows(&rows);
        tracing::debug!(
            rows = rows.len(),
            excluded = excluded.len(),
            "timeline report built"
        );
        Ok(TimelineReport {
            generated_on: today,
            rows,
            excluded,
            summary,
        })
    }

    /// Fetches a project's issues, degrading to an empty list on failure.
    async fn fetch_issues(&self, project: &ProjectRecord) -> Vec<IssueRecord> {
        match self.source.list_project_issues(project.id()).await {
            Ok(issues) => issues,
            Err(err) => {
                tracing::warn!(
                    project_id = %project.id(),
                    project_name = project.name(),
                    error = %err,
                    "could not fetch issues; continuing without them"
                );
                Vec::new()
            }
        }
    }
}

fn sort_rows(rows: &mut [GanttRow]) {
    rows.sort_by(|left, right| {
        left.start
            .cmp(&right.start)
            .then_with(|| left.name.cmp(&right.name))
    });
}
