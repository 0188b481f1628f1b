//! Effective start date inference.

use crate::timeline::domain::{CanonicalStatus, IssueRecord, ProjectRecord};
use chrono::NaiveDate;

/// Infers the date a project's bar should start on.
///
/// - Planned projects keep their explicit start. Without one, the oldest
///   issue creation date stands in for when the work was first conceived.
/// - In-progress projects start on the earliest date any started or
///   completed issue began (its completion date when no start was recorded),
///   falling back to the explicit start.
/// - Done and cancelled projects use the explicit start as-is.
///
/// Returns `None` when none of these yield a date.
#[must_use]
pub fn infer_effective_start(project: &ProjectRecord, issues: &[IssueRecord]) -> Option<NaiveDate> {
    match project.status() {
        CanonicalStatus::Planned => project
            .explicit_start_date()
            .or_else(|| issues.iter().filter_map(IssueRecord::created_on).min()),
        CanonicalStatus::InProgress => issues
            .iter()
            .filter(|issue| issue.stage().has_execution())
            .filter_map(|issue| issue.started_on().or_else(|| issue.completed_on()))
            .min()
            .or_else(|| project.explicit_start_date()),
        CanonicalStatus::Done | CanonicalStatus::Cancelled => project.explicit_start_date(),
    }
}
