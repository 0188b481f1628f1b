//! Flat per-project record handed to rendering collaborators.

use super::{CanonicalStatus, ProjectId, Progress};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One Gantt bar: a project with its effective schedule.
///
/// Dates serialise as ISO-8601 calendar dates, or `null` when they could not
/// be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttRow {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Effective start date.
    pub start: Option<NaiveDate>,
    /// Effective end date.
    pub end: Option<NaiveDate>,
    /// Completion percentage.
    pub progress: Progress,
    /// Canonical phase.
    pub status: CanonicalStatus,
    /// Display colour carried over from the project.
    pub color: Option<String>,
    /// Lead display name.
    pub lead: Option<String>,
    /// Free-text project description; omitted from the serialised record
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the end date has passed for an unfinished project.
    pub is_overdue: bool,
    /// Number of issues in the project.
    pub issue_count: usize,
    /// Number of completed issues in the project.
    pub completed_issue_count: usize,
}

impl GanttRow {
    /// Returns the resolved `(start, end)` pair when both dates are known.
    #[must_use]
    pub const fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Returns whether the row can be drawn as a bar.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.span().is_some()
    }
}
