//! Report values produced by [`super::TimelineReportService`].

use crate::timeline::domain::{GanttRow, ProjectId, ProjectRecord, Progress};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Group label for rows whose project has no lead.
pub const UNASSIGNED_LEAD: &str = "Unassigned";

/// Inclusive calendar window used to keep rows that overlap it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateWindow {
    /// Creates a window; either bound may be open.
    #[must_use]
    pub const fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Returns whether `[start, end]` overlaps the window.
    #[must_use]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let ends_before = self.from.is_some_and(|from| end < from);
        let starts_after = self.to.is_some_and(|to| start > to);
        !ends_before && !starts_after
    }
}

/// Narrowing applied to a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    teams: BTreeSet<String>,
    window: Option<DateWindow>,
}

impl ReportFilter {
    /// Keeps only projects owned by at least one of the given teams.
    #[must_use]
    pub fn with_teams(mut self, teams: impl IntoIterator<Item = String>) -> Self {
        self.teams = teams.into_iter().collect();
        self
    }

    /// Keeps only rows overlapping the window.
    #[must_use]
    pub const fn with_window(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub(super) fn admits_project(&self, project: &ProjectRecord) -> bool {
        self.teams.is_empty()
            || project
                .team_names()
                .iter()
                .any(|team| self.teams.contains(team))
    }

    pub(super) fn admits_row(&self, row: &GanttRow) -> bool {
        match (self.window, row.span()) {
            (None, _) => true,
            (Some(window), Some((start, end))) => window.overlaps(start, end),
            (Some(_), None) => false,
        }
    }
}

/// Which effective date could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDate {
    /// No effective start.
    Start,
    /// No effective end.
    End,
    /// Neither date.
    Both,
}

impl MissingDate {
    pub(super) const fn of(row: &GanttRow) -> Option<Self> {
        match (row.start.is_some(), row.end.is_some()) {
            (true, true) => None,
            (false, true) => Some(Self::Start),
            (true, false) => Some(Self::End),
            (false, false) => Some(Self::Both),
        }
    }
}

/// A project left out of the rendered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedProject {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// The unresolved date.
    pub missing: MissingDate,
}

/// Aggregate figures over the rows of a report.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ReportSummary {
    /// Number of rows.
    pub total_projects: usize,
    /// Issues across all rows.
    pub total_issues: usize,
    /// Completed issues across all rows.
    pub completed_issues: usize,
    /// Mean progress across all rows; zero for an empty report.
    pub average_progress: Progress,
}

impl ReportSummary {
    /// Aggregates the given rows.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "average progress is a display percentage"
    )]
    pub fn from_rows(rows: &[GanttRow]) -> Self {
        let total_progress: f64 = rows.iter().map(|row| row.progress.value()).sum();
        let average_progress = u32::try_from(rows.len())
            .ok()
            .filter(|count| *count > 0)
            .map_or_else(Progress::default, |count| {
                Progress::new(total_progress / f64::from(count))
            });
        Self {
            total_projects: rows.len(),
            total_issues: rows.iter().map(|row| row.issue_count).sum(),
            completed_issues: rows.iter().map(|row| row.completed_issue_count).sum(),
            average_progress,
        }
    }
}

/// Field used to group report rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Group by canonical status name.
    Status,
    /// Group by lead name; rows without a lead fall under
    /// [`UNASSIGNED_LEAD`].
    Lead,
}

/// Timeline report for one batch of projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineReport {
    /// Reference date every row was evaluated against.
    pub generated_on: NaiveDate,
    /// Rows with both effective dates resolved, ordered by start then name.
    pub rows: Vec<GanttRow>,
    /// Projects dropped for lack of an effective date.
    pub excluded: Vec<ExcludedProject>,
    /// Aggregate figures over [`Self::rows`].
    pub summary: ReportSummary,
}

impl TimelineReport {
    /// Groups rows by the given key, preserving row order within a group.
    #[must_use]
    pub fn group_by(&self, key: GroupKey) -> BTreeMap<String, Vec<&GanttRow>> {
        let mut groups: BTreeMap<String, Vec<&GanttRow>> = BTreeMap::new();
        for row in &self.rows {
            let label = match key {
                GroupKey::Status => row.status.as_str().to_owned(),
                GroupKey::Lead => row
                    .lead
                    .clone()
                    .unwrap_or_else(|| UNASSIGNED_LEAD.to_owned()),
            };
            groups.entry(label).or_default().push(row);
        }
        groups
    }

    /// Returns the row for a project, if it was included.
    #[must_use]
    pub fn row(&self, id: &ProjectId) -> Option<&GanttRow> {
        self.rows.iter().find(|row| &row.id == id)
    }
}
